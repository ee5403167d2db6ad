//! Value Objects
//!
//! Parsing of the three user-supplied fields of a server record. The
//! order of checks in [`ServerDraft::parse`] decides which message a
//! caller sees when several fields are wrong at once.

use std::fmt;
use std::net::Ipv4Addr;

use crate::error::{InventoryError, InventoryResult};

/// Maximum server name length (characters)
pub const MAX_SERVER_NAME_LENGTH: usize = 100;

// ============================================================================
// IPv4 address
// ============================================================================

/// True if `s` is four dot-separated decimal groups, each 0..=255.
///
/// Groups must be plain ASCII digits: signs, spaces, and empty groups are
/// rejected. Leading zeros are accepted (`"010.0.0.1"`).
pub fn is_valid_ipv4(s: &str) -> bool {
    parse_octets(s).is_some()
}

fn parse_octets(s: &str) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut groups = s.split('.');

    for octet in octets.iter_mut() {
        let group = groups.next()?;
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *octet = group.parse().ok()?;
    }

    if groups.next().is_some() {
        return None;
    }
    Some(octets)
}

/// Validated IPv4 address, keeping the text exactly as the caller wrote it
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ipv4Address {
    text: String,
    octets: [u8; 4],
}

impl Ipv4Address {
    pub fn parse(s: &str) -> InventoryResult<Self> {
        let octets = parse_octets(s).ok_or(InventoryError::InvalidIp)?;
        Ok(Self {
            text: s.to_string(),
            octets,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn to_std(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.octets)
    }
}

impl fmt::Debug for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ipv4Address").field(&self.text).finish()
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ============================================================================
// Port
// ============================================================================

/// True if `p` is a usable TCP port
pub fn is_valid_port(p: i64) -> bool {
    (1..=i64::from(u16::MAX)).contains(&p)
}

/// Port as received, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawPort {
    /// JSON integer
    Integer(i64),
    /// String that should hold an integer, e.g. a path segment
    Text(String),
    /// Any other JSON value (float, bool, array, object)
    Unsupported,
}

impl RawPort {
    fn is_blank(&self) -> bool {
        matches!(self, RawPort::Text(s) if s.trim().is_empty())
    }
}

/// TCP port in 1..=65535
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Port(u16);

impl Port {
    pub fn new(port: u16) -> Option<Self> {
        (port != 0).then_some(Self(port))
    }

    pub fn parse(raw: &RawPort) -> InventoryResult<Self> {
        let value = match raw {
            RawPort::Integer(n) => *n,
            RawPort::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| InventoryError::InvalidPortNumber)?,
            RawPort::Unsupported => return Err(InventoryError::InvalidPortNumber),
        };

        if value <= 0 {
            return Err(InventoryError::PortNotPositive);
        }
        if !is_valid_port(value) {
            return Err(InventoryError::PortOutOfRange);
        }
        u16::try_from(value)
            .map(Self)
            .map_err(|_| InventoryError::PortOutOfRange)
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Server name
// ============================================================================

/// Display label of a server, trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerName(String);

impl ServerName {
    pub fn new(raw: &str) -> InventoryResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InventoryError::MissingFields);
        }
        if trimmed.chars().count() > MAX_SERVER_NAME_LENGTH {
            return Err(InventoryError::NameTooLong);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Server draft
// ============================================================================

/// Unvalidated add/update input
#[derive(Debug, Clone, Default)]
pub struct ServerInput {
    pub ip: Option<String>,
    pub name: Option<String>,
    pub port: Option<RawPort>,
}

/// Validated fields of a server, ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDraft {
    pub ip: Ipv4Address,
    pub name: ServerName,
    pub port: Port,
}

impl ServerDraft {
    /// Validate input in a fixed order: presence, IP, port, name length.
    pub fn parse(input: &ServerInput) -> InventoryResult<Self> {
        let (Some(ip), Some(name), Some(port)) = (&input.ip, &input.name, &input.port) else {
            return Err(InventoryError::MissingFields);
        };
        if ip.is_empty() || name.trim().is_empty() || port.is_blank() {
            return Err(InventoryError::MissingFields);
        }

        let ip = Ipv4Address::parse(ip)?;
        let port = Port::parse(port)?;
        let name = ServerName::new(name)?;

        Ok(Self { ip, name, port })
    }
}
