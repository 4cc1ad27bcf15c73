//! Error handling middleware - consistent JSON error responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use forecourt_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to `{ status, message }`
/// bodies.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Validation(String),
    Forbidden,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            AppError::Forbidden => write!(f, "Forbidden"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(msg) => ErrorResponse::not_found(msg),
            AppError::Validation(msg) => ErrorResponse::bad_request(msg),
            AppError::Forbidden => ErrorResponse::forbidden("Forbidden"),
            AppError::Internal(detail) => {
                // Log internals; the body carries a generic message only
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<forecourt_core::error::DomainError> for AppError {
    fn from(err: forecourt_core::error::DomainError) -> Self {
        match err {
            forecourt_core::error::DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            forecourt_core::error::DomainError::Validation(msg) => AppError::Validation(msg),
            forecourt_core::error::DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<forecourt_core::error::RepoError> for AppError {
    fn from(err: forecourt_core::error::RepoError) -> Self {
        match err {
            forecourt_core::error::RepoError::NotFound => {
                AppError::NotFound("Resource not found".to_string())
            }
            forecourt_core::error::RepoError::Constraint(msg) => {
                tracing::error!("Unexpected constraint violation: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            forecourt_core::error::RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            forecourt_core::error::RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use forecourt_core::error::RepoError;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn repo_failures_surface_as_internal_without_detail() {
        let err = AppError::from(RepoError::Query("relation vehicles missing".into()));
        match err {
            AppError::Internal(msg) => assert_eq!(msg, "Database error"),
            other => panic!("expected Internal, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn not_found_body_carries_status_and_message() {
        let resp = AppError::NotFound("Vehicle 42 not found".into()).error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let bytes = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.status, 404);
        assert_eq!(body.message, "Vehicle 42 not found");
    }
}
