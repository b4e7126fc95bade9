use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::models::MessageResponse;
use crate::services::activities_service;
use crate::web::error::ApiResult;
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn activity_signup_handler(
    Path(activity_name): Path<String>,
    State(state): State<AppState>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Query(query) = query?;
    let res = activities_service::signup(&state.store, &activity_name, &query.email)?;
    Ok(Json(res))
}

pub async fn activity_unregister_handler(
    Path(activity_name): Path<String>,
    State(state): State<AppState>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Query(query) = query?;
    let res = activities_service::unregister(&state.store, &activity_name, &query.email)?;
    Ok(Json(res))
}
