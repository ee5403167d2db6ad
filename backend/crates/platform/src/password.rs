//! Password Hashing and Verification
//!
//! - Argon2id hashing (memory-hard, recommended by OWASP)
//! - Zeroization of sensitive data
//! - Constant-time comparison
//! - NIST SP 800-63B strength checks, applied when an operator chooses a
//!   password (never when one is merely submitted for verification)

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

// ============================================================================
// Constants (NIST SP 800-63B)
// ============================================================================

/// Minimum password length (NIST: SHALL be at least 8)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length (NIST: SHOULD permit at least 64)
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,

    #[error("Password is too common or follows a predictable pattern")]
    CommonPattern,
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("correct horse battery".to_string()).unwrap();
/// assert!(password.check_strength().is_ok());
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Accept a submitted password
    ///
    /// Unicode is normalized using NFKC. Only structural checks apply here:
    /// non-blank, at most [`MAX_PASSWORD_LENGTH`] code points, no control
    /// characters. Use [`ClearTextPassword::check_strength`] when the
    /// password is being chosen rather than verified.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let raw = Zeroizing::new(raw);
        let normalized: String = raw.nfkc().collect();
        let password = Self(normalized);

        if password.0.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        // NIST: count Unicode code points, not bytes
        let char_count = password.0.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if password
            .0
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(password)
    }

    /// NIST strength checks: minimum length and common patterns
    pub fn check_strength(&self) -> Result<(), PasswordPolicyError> {
        let char_count = self.0.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if is_common_pattern(&self.0) {
            return Err(PasswordPolicyError::CommonPattern);
        }

        Ok(())
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(self.0.as_bytes().to_vec());
        if let Some(p) = pepper {
            bytes.extend_from_slice(p);
        }
        bytes
    }

    /// Hash the password using Argon2id
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret mixed into the input
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = self.peppered(pepper);

        // 128-bit random salt
        let salt = SaltString::generate(OsRng);

        // Argon2id, m=19456 (19 MiB), t=2, p=1
        let hash = Argon2::default()
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// ## Examples
/// ```rust
/// use platform::password::{ClearTextPassword, HashedPassword};
///
/// let password = ClearTextPassword::new("admin123".to_string()).unwrap();
/// let hashed = password.hash(None).unwrap();
///
/// let restored = HashedPassword::from_phc_string(hashed.as_phc_string()).unwrap();
/// assert!(restored.verify(&password, None));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Argon2 compares digests in constant time.
    ///
    /// ## Arguments
    /// * `password` - The clear text password to verify
    /// * `pepper` - Optional pepper (must match the one used during hashing)
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(&password.peppered(pepper), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Check for common weak patterns
fn is_common_pattern(password: &str) -> bool {
    let lower = password.to_lowercase();

    // All same character (e.g., "aaaaaaaa")
    let mut chars = lower.chars();
    if let Some(first) = chars.next() {
        if chars.all(|c| c == first) {
            return true;
        }
    }

    if is_sequential_numbers(&lower) {
        return true;
    }

    const KEYBOARD_PATTERNS: &[&str] = &[
        "qwerty",
        "asdfgh",
        "zxcvbn",
        "qazwsx",
        "1qaz2wsx",
    ];
    if KEYBOARD_PATTERNS.iter().any(|p| lower.contains(p)) {
        return true;
    }

    const COMMON_PASSWORDS: &[&str] = &[
        "password",
        "password1",
        "password123",
        "abcdefgh",
        "letmein",
        "welcome",
        "admin",
        "admin123",
        "administrator",
        "changeme",
        "iloveyou",
        "sunshine",
        "football",
        "master",
        "dragon",
        "trustno1",
    ];

    COMMON_PASSWORDS.contains(&lower.as_str())
}

/// Check if string is sequential numbers
fn is_sequential_numbers(s: &str) -> bool {
    let digits: Vec<u32> = s.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() < 4 || digits.len() != s.chars().count() {
        return false;
    }

    let is_ascending = digits
        .windows(2)
        .all(|w| w[1] == w[0] + 1 || (w[0] == 9 && w[1] == 0));

    let is_descending = digits
        .windows(2)
        .all(|w| w[0] == w[1] + 1 || (w[0] == 0 && w[1] == 9));

    is_ascending || is_descending
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn password(raw: &str) -> ClearTextPassword {
        ClearTextPassword::new(raw.to_string()).unwrap()
    }

    #[test]
    fn test_submitted_password_structural_checks() {
        assert!(matches!(
            ClearTextPassword::new("".to_string()),
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
        assert!(matches!(
            ClearTextPassword::new("   ".to_string()),
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
        assert!(matches!(
            ClearTextPassword::new("a".repeat(MAX_PASSWORD_LENGTH + 1)),
            Err(PasswordPolicyError::TooLong { .. })
        ));
        assert!(matches!(
            ClearTextPassword::new("bad\u{0007}bell".to_string()),
            Err(PasswordPolicyError::InvalidCharacter)
        ));
    }

    #[test]
    fn test_weak_password_is_accepted_but_flagged() {
        // Verification must work for weak legacy passwords.
        let weak = password("admin123");
        assert_eq!(weak.check_strength(), Err(PasswordPolicyError::CommonPattern));

        assert!(matches!(
            password("short").check_strength(),
            Err(PasswordPolicyError::TooShort { min: 8, actual: 5 })
        ));
        assert_eq!(
            password("12345678").check_strength(),
            Err(PasswordPolicyError::CommonPattern)
        );
        assert_eq!(
            password("zzzzzzzzzz").check_strength(),
            Err(PasswordPolicyError::CommonPattern)
        );
    }

    #[test]
    fn test_strong_password() {
        assert!(password("Rack-42-Switch!").check_strength().is_ok());
        assert!(password("パスワード安全です!").check_strength().is_ok());
    }

    #[test]
    fn test_nfkc_normalization_applies_before_hashing() {
        // Fullwidth "ａｂｃ" normalizes to "abc".
        let hashed = password("ａｂｃ-server-pw").hash(None).unwrap();
        assert!(hashed.verify(&password("abc-server-pw"), None));
    }

    #[test]
    fn test_hash_and_verify() {
        let hashed = password("admin123").hash(None).unwrap();
        assert!(hashed.verify(&password("admin123"), None));
        assert!(!hashed.verify(&password("admin124"), None));
    }

    #[test]
    fn test_hash_is_salted() {
        let a = password("admin123").hash(None).unwrap();
        let b = password("admin123").hash(None).unwrap();
        assert_ne!(a.as_phc_string(), b.as_phc_string());
        assert!(a.as_phc_string().starts_with("$argon2id$"));
    }

    #[test]
    fn test_hash_with_pepper() {
        let pepper = b"inventory-pepper";
        let hashed = password("admin123").hash(Some(pepper)).unwrap();

        assert!(hashed.verify(&password("admin123"), Some(pepper)));
        assert!(!hashed.verify(&password("admin123"), None));
        assert!(!hashed.verify(&password("admin123"), Some(b"other")));
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(HashedPassword::from_phc_string("not_a_valid_hash").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let debug_output = format!("{:?}", password("secret-value"));
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret-value"));
    }
}
