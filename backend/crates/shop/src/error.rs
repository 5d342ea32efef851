//! Shop Error Types
//!
//! Shop-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Wire format for every failure is
//! `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Shop-specific result type alias
pub type ShopResult<T> = Result<T, ShopError>;

/// Shop-specific error variants
#[derive(Debug, Error)]
pub enum ShopError {
    /// Product lookup miss (unknown or malformed id)
    #[error("Product not found")]
    ProductNotFound,

    /// Order placed with no items
    #[error("Cart is empty")]
    EmptyCart,

    /// Item quantity below one
    #[error("Invalid item quantity")]
    InvalidQuantity,

    /// Item price below zero
    #[error("Invalid item price")]
    InvalidPrice,

    /// Client-supplied total disagrees with the recomputed total
    #[error("Order total does not match item prices")]
    TotalMismatch,

    /// Database error
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error")]
    Internal(String),
}

impl ShopError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShopError::ProductNotFound => StatusCode::NOT_FOUND,
            ShopError::EmptyCart
            | ShopError::InvalidQuantity
            | ShopError::InvalidPrice
            | ShopError::TotalMismatch => StatusCode::BAD_REQUEST,
            ShopError::Database(_) | ShopError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShopError::ProductNotFound => ErrorKind::NotFound,
            ShopError::EmptyCart
            | ShopError::InvalidQuantity
            | ShopError::InvalidPrice
            | ShopError::TotalMismatch => ErrorKind::BadRequest,
            ShopError::Database(_) | ShopError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ShopError::Database(e) => {
                tracing::error!(error = %e, "Shop database error");
            }
            ShopError::Internal(msg) => {
                tracing::error!(message = %msg, "Shop internal error");
            }
            ShopError::TotalMismatch => {
                tracing::warn!("Rejected order with mismatched total");
            }
            _ => {
                tracing::debug!(error = %self, "Shop error");
            }
        }
    }
}

impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for ShopError {
    fn from(err: AppError) -> Self {
        ShopError::Internal(err.to_string())
    }
}
