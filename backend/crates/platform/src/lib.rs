//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256 token signing, Base64, random keys)
//! - Password hashing (Argon2id, NIST SP 800-63B policy checks)
//! - Cookie management
//! - Client identification (IP address, User-Agent)
//! - HTML escaping and the page shell for server-rendered views

pub mod client;
pub mod cookie;
pub mod crypto;
pub mod html;
pub mod password;
