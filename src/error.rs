//!
//! # Custom Error Handling
//!
//! This module defines the transport-level error type `AppError`. The services return their
//! own typed errors (`AuthError`, `TaskError`, `TokenError`); the `From` implementations here
//! decide which HTTP status each outcome becomes, so the services never deal with HTTP.
//!
//! `AppError` implements `actix_web::error::ResponseError` and renders `{"error": message}`.
//! Infrastructure failures are logged here and reach the client only as a generic message.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::auth::{AuthError, TokenError};
use crate::tasks::TaskError;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Represents all errors a handler can answer with.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed or is required but missing (HTTP 401).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// Malformed request or a rejected registration (HTTP 400).
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// The caller is authenticated but does not own the resource (HTTP 403).
    #[error("Forbidden: {0}")]
    Forbidden(String),
    /// The requested resource does not exist (HTTP 404).
    #[error("Not Found: {0}")]
    NotFound(String),
    /// Unexpected server-side failure (HTTP 500). The message is logged, not returned.
    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
    /// Input failed declarative validation (HTTP 400).
    #[error("Validation Error: {0}")]
    ValidationError(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::InternalServerError(_) => INTERNAL_MESSAGE,
            AppError::Unauthorized(msg)
            | AppError::BadRequest(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::ValidationError(msg) => msg.as_str(),
        };
        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::ValidationError(error.to_string())
    }
}

impl From<TokenError> for AppError {
    fn from(error: TokenError) -> AppError {
        match error {
            TokenError::Invalid => AppError::Unauthorized("Invalid token".into()),
            TokenError::Expired => AppError::Unauthorized("Token expired".into()),
            TokenError::Signing(msg) => {
                log::error!("token signing failed: {}", msg);
                AppError::InternalServerError(msg)
            }
        }
    }
}

/// Unknown email and wrong password render identically so the response does not reveal
/// whether an account exists.
impl From<AuthError> for AppError {
    fn from(error: AuthError) -> AppError {
        match error {
            AuthError::DuplicateCredential => {
                AppError::BadRequest("User with this email already exists".into())
            }
            AuthError::CredentialNotFound | AuthError::CredentialMismatch => {
                log::warn!("login rejected: {}", error);
                AppError::Unauthorized("Invalid credentials".into())
            }
            AuthError::HashingFailure(msg) | AuthError::PersistenceFailure(msg) => {
                log::error!("registration infrastructure failure: {}", msg);
                AppError::InternalServerError(msg)
            }
            AuthError::Token(token_error) => token_error.into(),
        }
    }
}

impl From<TaskError> for AppError {
    fn from(error: TaskError) -> AppError {
        match error {
            TaskError::NotFound => AppError::NotFound("Task not found".into()),
            TaskError::Forbidden => {
                AppError::Forbidden("You are not permitted to access this task".into())
            }
            TaskError::Persistence(store_error) => {
                log::error!("task storage failure: {}", store_error);
                AppError::InternalServerError(store_error.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_error_responses() {
        let error = AppError::Unauthorized("Invalid token".into());
        assert_eq!(error.error_response().status(), 401);

        let error = AppError::BadRequest("Invalid input".into());
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::ValidationError("title: too short".into());
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::Forbidden("Not yours".into());
        assert_eq!(error.error_response().status(), 403);

        let error = AppError::NotFound("Resource not found".into());
        assert_eq!(error.error_response().status(), 404);

        let error = AppError::InternalServerError("Server error".into());
        assert_eq!(error.error_response().status(), 500);
    }

    #[test]
    fn test_login_failures_are_indistinguishable() {
        let not_found = AppError::from(AuthError::CredentialNotFound);
        let mismatch = AppError::from(AuthError::CredentialMismatch);
        assert_eq!(not_found.to_string(), mismatch.to_string());
        assert_eq!(not_found.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_domain_error_statuses() {
        let cases = vec![
            (AppError::from(AuthError::DuplicateCredential), 400),
            (AppError::from(AuthError::HashingFailure("oom".into())), 500),
            (AppError::from(AuthError::PersistenceFailure("gone".into())), 500),
            (AppError::from(AuthError::Token(TokenError::Expired)), 401),
            (AppError::from(TokenError::Invalid), 401),
            (AppError::from(TaskError::NotFound), 404),
            (AppError::from(TaskError::Forbidden), 403),
            (AppError::from(TaskError::Persistence(StoreError::UniqueViolation)), 500),
        ];
        for (error, expected) in cases {
            assert_eq!(error.status_code().as_u16(), expected, "{}", error);
        }
    }

    #[actix_rt::test]
    async fn test_internal_details_are_not_returned() {
        let error = AppError::InternalServerError("connection refused at 10.0.0.3".into());
        let body = actix_web::body::to_bytes(error.error_response().into_body())
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], INTERNAL_MESSAGE);
    }
}
