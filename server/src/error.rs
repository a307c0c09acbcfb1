use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::domain::DomainError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Domain(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Domain(DomainError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            AppError::Domain(DomainError::Conflict(_)) => StatusCode::CONFLICT,
            AppError::Domain(DomainError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::from(DomainError::InvalidInput("Insufficient balance".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(DomainError::Conflict("taken".into())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(DomainError::Internal("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_domain_message_is_passed_through() {
        let err = AppError::from(DomainError::NotFound("User not found".into()));
        assert_eq!(err.to_string(), "User not found");
    }
}
