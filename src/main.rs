use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington_activities::{build_router, ActivityStore, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load .env
    dotenvy::dotenv().ok();

    // 2. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();
    info!("starting activities service");

    let config = Config::from_env();

    // 3. Seeded directory
    let store = ActivityStore::seeded();
    info!(activities = store.list().activities.len(), "activity directory seeded");

    let app = build_router(AppState::new(store), &config.static_dir);

    // 4. Bind (with fallback port)
    let addr = config.addr()?;
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, error = %e, %fallback, "bind failed, trying fallback port");
            TcpListener::bind(fallback)
                .await
                .with_context(|| format!("cannot bind fallback address {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("listening on http://{}", bound_addr);
    info!("open http://{}/ to browse activities", bound_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
