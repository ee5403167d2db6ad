//! Inventory Error Types
//!
//! Integrates with the unified `kernel::error::AppError` system. Every
//! variant renders as `{"error": "<message>"}` with the status from
//! [`InventoryError::kind`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Inventory-specific result type alias
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-specific error variants
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Caller lacks an admin session
    #[error("Unauthorized")]
    Unauthorized,

    /// ip, name, or port was absent or empty
    #[error("IP, name, and port are required")]
    MissingFields,

    #[error("Invalid IP address")]
    InvalidIp,

    /// Port text could not be read as an integer
    #[error("Invalid port number")]
    InvalidPortNumber,

    #[error("Port must be a positive integer")]
    PortNotPositive,

    #[error("Port must be between 1 and 65535")]
    PortOutOfRange,

    #[error("Server name must be at most 100 characters")]
    NameTooLong,

    /// Request body was not a JSON object
    #[error("Invalid request body")]
    MalformedBody(String),

    #[error("Server not found")]
    ServerNotFound,

    /// Database error
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl InventoryError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            InventoryError::Unauthorized => ErrorKind::Forbidden,
            InventoryError::MissingFields
            | InventoryError::InvalidIp
            | InventoryError::InvalidPortNumber
            | InventoryError::PortNotPositive
            | InventoryError::PortOutOfRange
            | InventoryError::NameTooLong
            | InventoryError::MalformedBody(_) => ErrorKind::BadRequest,
            InventoryError::ServerNotFound => ErrorKind::NotFound,
            InventoryError::Database(_) | InventoryError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// True for input problems the caller can fix
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::BadRequest)
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            InventoryError::Internal(_) => AppError::internal("Internal server error"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            InventoryError::Database(e) => {
                tracing::error!(error = %e, "Inventory database error");
            }
            InventoryError::Internal(msg) => {
                tracing::error!(message = %msg, "Inventory internal error");
            }
            InventoryError::Unauthorized => {
                tracing::warn!("Rejected inventory change from non-admin caller");
            }
            InventoryError::MalformedBody(reason) => {
                tracing::debug!(reason = %reason, "Malformed request body");
            }
            _ => {
                tracing::debug!(error = %self, "Inventory error");
            }
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for InventoryError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::Forbidden | ErrorKind::Unauthorized => InventoryError::Unauthorized,
            _ => InventoryError::Internal(err.to_string()),
        }
    }
}
