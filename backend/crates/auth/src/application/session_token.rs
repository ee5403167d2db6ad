//! Session Token
//!
//! The cookie carries `<session_id>.<signature>`; the signature is an
//! HMAC-SHA256 over the session id under the configured secret.

use kernel::id::AdminSessionId;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Sign a session id for the cookie
pub fn issue(config: &AuthConfig, session_id: AdminSessionId) -> String {
    platform::crypto::sign(&config.session_secret, &session_id.to_string())
}

/// Verify the signature and recover the session id
pub fn parse(config: &AuthConfig, token: &str) -> AuthResult<AdminSessionId> {
    let payload =
        platform::crypto::verify(&config.session_secret, token).ok_or(AuthError::SessionInvalid)?;

    payload
        .parse::<Uuid>()
        .map(AdminSessionId::from_uuid)
        .map_err(|_| AuthError::SessionInvalid)
}
