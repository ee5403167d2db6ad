//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password field was left empty
    #[error("Username and password are required.")]
    MissingCredentials,

    /// Unknown username or wrong password. Deliberately one variant.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session not found, expired, or signature mismatch
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Configured admin username is unusable
    #[error("Invalid admin username: {0}")]
    InvalidAdminName(String),

    /// Configured admin password is unusable
    #[error("Invalid admin password: {0}")]
    InvalidAdminPassword(String),

    /// Stored hash could not be parsed
    #[error("Stored credential is corrupt")]
    CorruptCredential,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCredentials
            | AuthError::InvalidAdminName(_)
            | AuthError::InvalidAdminPassword(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::CorruptCredential | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Message safe to show the caller
    pub fn public_message(&self) -> String {
        match self {
            AuthError::CorruptCredential | AuthError::Database(_) | AuthError::Internal(_) => {
                "Login is temporarily unavailable".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.public_message())
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::CorruptCredential => {
                tracing::error!("Stored admin password hash could not be parsed");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_errors_share_status() {
        assert_eq!(AuthError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::MissingCredentials.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::InvalidCredentials.public_message(),
            "Invalid credentials"
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AuthError::Internal("pool exploded at 0xdeadbeef".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.to_app_error().message().contains("0xdeadbeef"));
    }
}
