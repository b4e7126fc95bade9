use axum_test::TestServer;
use mergington_activities::{build_router, ActivityStore, AppState};

pub struct TestApp {
    pub server: TestServer,
    pub store: ActivityStore,
}

/// Server over a freshly seeded directory.
pub fn spawn_app() -> TestApp {
    let store = ActivityStore::seeded();
    let app = build_router(
        AppState::new(store.clone()),
        concat!(env!("CARGO_MANIFEST_DIR"), "/static"),
    );
    let server = TestServer::new(app).expect("test server should build");
    TestApp { server, store }
}

pub fn signup_path(activity: &str) -> String {
    format!("/activities/{}/signup", activity.replace(' ', "%20"))
}

pub fn unregister_path(activity: &str) -> String {
    format!("/activities/{}/unregister", activity.replace(' ', "%20"))
}
