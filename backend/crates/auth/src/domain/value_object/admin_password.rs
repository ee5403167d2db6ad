//! Admin Password Value Objects
//!
//! Delegates to `platform::password` for cryptographic operations.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::admin_password::{AdminPassword, RawPassword};
//!
//! let raw = RawPassword::new("admin123".to_string()).unwrap();
//! let hashed = AdminPassword::from_raw(&raw, None).unwrap();
//! assert!(hashed.verify(&raw, None));
//! ```

use std::fmt;

use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};

use crate::error::AuthError;

// ============================================================================
// Raw Password (submitted or configured plaintext)
// ============================================================================

/// Plaintext password, zeroized on drop
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Accept a plaintext password
    ///
    /// Only structural checks apply (non-blank, bounded length, no control
    /// characters); strength is reported separately by
    /// [`RawPassword::weakness`].
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        ClearTextPassword::new(raw).map(Self)
    }

    /// Why this password would be rejected by the strength policy, if at all
    pub fn weakness(&self) -> Option<PasswordPolicyError> {
        self.0.check_strength().err()
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Admin Password (Hashed, for storage)
// ============================================================================

/// Argon2id PHC hash of the admin password
#[derive(Clone, PartialEq, Eq)]
pub struct AdminPassword(HashedPassword);

impl AdminPassword {
    /// Hash a raw password for storage
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> Result<Self, AuthError> {
        raw.inner()
            .hash(pepper)
            .map(Self)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Rebuild from the PHC string stored in the database
    pub fn from_phc_string(phc_string: impl Into<String>) -> Result<Self, AuthError> {
        HashedPassword::from_phc_string(phc_string)
            .map(Self)
            .map_err(|_| AuthError::CorruptCredential)
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Constant-time verification of `raw` against this hash
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for AdminPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}
