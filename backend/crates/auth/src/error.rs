//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Status mapping keeps wire parity with the storefront client: missing
//! fields, duplicate emails, and bad credentials are all 400s; only
//! token failures are 401s.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// One or more required fields missing or empty
    #[error("All fields required")]
    MissingFields,

    /// Email already registered
    #[error("User already exists")]
    EmailTaken,

    /// Unknown email or wrong password (deliberately indistinguishable)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bearer header absent
    #[error("No token provided")]
    NoToken,

    /// Malformed, tampered, or expired token (all collapse to one outcome)
    #[error("Invalid token")]
    InvalidToken,

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Field-level validation failure (email format etc.)
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    /// Internal error (hashing/signing failure)
    #[error("Internal error")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingFields
            | AuthError::EmailTaken
            | AuthError::InvalidCredentials
            | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::NoToken | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields
            | AuthError::EmailTaken
            | AuthError::InvalidCredentials
            | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::NoToken | AuthError::InvalidToken => ErrorKind::Unauthorized,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected invalid bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
