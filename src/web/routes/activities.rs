use axum::{extract::State, Json};

use crate::models::ActivityDirectoryView;
use crate::services::activities_service;
use crate::web::AppState;

pub async fn activities_handler(State(state): State<AppState>) -> Json<ActivityDirectoryView> {
    Json(activities_service::list_activities(&state.store))
}
