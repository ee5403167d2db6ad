//! Cryptographic Utilities
//!
//! Session tokens are `<payload>.<base64url(HMAC-SHA256(key, payload))>`.
//! [`sign`] produces them and [`verify`] checks them in constant time.

use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Generate a random 32-byte key (e.g. a development session secret)
pub fn random_key() -> [u8; 32] {
    let mut key = [0u8; 32];
    OsRng.fill_bytes(&mut key);
    key
}

/// Encode bytes as standard base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode standard base64 to bytes
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s.trim())
}

fn keyed_mac(key: &[u8; 32], data: &[u8]) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac
}

/// Compute HMAC-SHA256
pub fn hmac_sha256(key: &[u8; 32], data: &[u8]) -> [u8; 32] {
    keyed_mac(key, data).finalize().into_bytes().into()
}

/// Sign `payload`, returning `payload.signature`
pub fn sign(key: &[u8; 32], payload: &str) -> String {
    let mac = hmac_sha256(key, payload.as_bytes());
    format!(
        "{}.{}",
        payload,
        general_purpose::URL_SAFE_NO_PAD.encode(mac)
    )
}

/// Verify a token produced by [`sign`] and return its payload
///
/// ## Returns
/// `None` when the token is malformed or the signature does not match.
pub fn verify<'a>(key: &[u8; 32], token: &'a str) -> Option<&'a str> {
    let (payload, signature) = token.rsplit_once('.')?;
    let provided = general_purpose::URL_SAFE_NO_PAD.decode(signature).ok()?;

    keyed_mac(key, payload.as_bytes())
        .verify_slice(&provided)
        .ok()
        .map(|_| payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_rfc4231_case_1() {
        // 20-byte key of 0x0b, zero-padded: padding does not change HMAC.
        let mut key = [0u8; 32];
        key[..20].copy_from_slice(&[0x0b; 20]);

        let mac = hmac_sha256(&key, b"Hi There");
        let expected =
            hex::decode("b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7")
                .unwrap();
        assert_eq!(mac.to_vec(), expected);
    }

    #[test]
    fn test_sign_then_verify() {
        let key = [7u8; 32];
        let token = sign(&key, "0f8fad5b-d9cb-469f-a165-70867728950e");
        assert_eq!(
            verify(&key, &token),
            Some("0f8fad5b-d9cb-469f-a165-70867728950e")
        );
    }

    #[test]
    fn test_verify_rejects_tampering() {
        let key = [7u8; 32];
        let token = sign(&key, "session-a");

        let forged = token.replacen("session-a", "session-b", 1);
        assert_eq!(verify(&key, &forged), None);
        assert_eq!(verify(&[8u8; 32], &token), None);
        assert_eq!(verify(&key, "no-signature"), None);
        assert_eq!(verify(&key, "payload.!!!"), None);
    }

    #[test]
    fn test_verify_rejects_truncated_signature() {
        let key = [7u8; 32];
        let token = sign(&key, "session-a");
        assert_eq!(verify(&key, &token[..token.len() - 4]), None);
    }

    #[test]
    fn test_random_key_differs() {
        assert_ne!(random_key(), random_key());
    }

    #[test]
    fn test_base64_tolerates_surrounding_whitespace() {
        let encoded = format!(" {}\n", to_base64(&[1, 2, 3]));
        assert_eq!(from_base64(&encoded).unwrap(), vec![1, 2, 3]);
    }
}
