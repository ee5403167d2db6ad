//! Admin Name Value Object
//!
//! Lookups are exact: no case folding or Unicode canonicalization is
//! applied, so `Admin` and `admin` are different identities.

use std::fmt;

use crate::error::AuthError;

/// Maximum admin username length (characters)
pub const MAX_ADMIN_NAME_LENGTH: usize = 50;

/// Administrator username
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AdminName(String);

impl AdminName {
    /// Validate a username
    ///
    /// Surrounding whitespace is trimmed. The result must be non-empty, at
    /// most [`MAX_ADMIN_NAME_LENGTH`] characters, and free of control
    /// characters.
    pub fn new(raw: &str) -> Result<Self, AuthError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(AuthError::InvalidAdminName(
                "username cannot be empty".to_string(),
            ));
        }
        if trimmed.chars().count() > MAX_ADMIN_NAME_LENGTH {
            return Err(AuthError::InvalidAdminName(format!(
                "username must be at most {} characters",
                MAX_ADMIN_NAME_LENGTH
            )));
        }
        if trimmed.chars().any(char::is_control) {
            return Err(AuthError::InvalidAdminName(
                "username contains control characters".to_string(),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Rebuild from a trusted database value
    pub(crate) fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AdminName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AdminName").field(&self.0).finish()
    }
}

impl fmt::Display for AdminName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_keeps_case() {
        let name = AdminName::new("  Admin ").unwrap();
        assert_eq!(name.as_str(), "Admin");
        assert_ne!(name, AdminName::new("admin").unwrap());
    }

    #[test]
    fn test_rejects_blank_long_and_control() {
        assert!(AdminName::new("   ").is_err());
        assert!(AdminName::new(&"a".repeat(MAX_ADMIN_NAME_LENGTH + 1)).is_err());
        assert!(AdminName::new(&"a".repeat(MAX_ADMIN_NAME_LENGTH)).is_ok());
        assert!(AdminName::new("ad\u{0000}min").is_err());
    }
}
