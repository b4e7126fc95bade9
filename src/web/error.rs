use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;

use crate::errors::ActivityError;
use crate::models::ErrorResponse;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error body in the `{"detail": "..."}` shape the front end reads.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.detail)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

impl From<ActivityError> for ApiError {
    fn from(err: ActivityError) -> Self {
        match err {
            ActivityError::NotFound => Self::not_found(err.to_string()),
            ActivityError::AlreadySignedUp | ActivityError::NotRegistered => {
                Self::bad_request(err.to_string())
            }
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_errors_map_to_status_codes() {
        assert_eq!(
            ApiError::from(ActivityError::NotFound).status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ActivityError::AlreadySignedUp).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ActivityError::NotRegistered).status,
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_found_detail_is_stable() {
        assert_eq!(
            ApiError::from(ActivityError::NotFound).detail,
            "Activity not found"
        );
    }
}
