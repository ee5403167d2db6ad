//! Domain Entities

use std::fmt;

use serde::Serialize;

/// Store-assigned server identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ServerId(pub i64);

impl ServerId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tracked server
///
/// Records only exist in the store once they passed validation, so
/// `ip` is a dotted-quad IPv4 address and `port` is within 1..=65535.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerRecord {
    pub id: ServerId,
    pub ip: String,
    pub name: String,
    pub port: u16,
}
