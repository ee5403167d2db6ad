//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.

use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type AdminId = Id<markers::Admin>;
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: uuid::Uuid,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for admin credential IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Admin;

    /// Marker for admin session IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AdminSession;
}

pub type AdminId = Id<markers::Admin>;
pub type AdminSessionId = Id<markers::AdminSession>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct_and_round_trip() {
        let a: AdminId = Id::new();
        let b: AdminId = Id::new();
        assert_ne!(a, b);

        let uuid = Uuid::new_v4();
        let session: AdminSessionId = Id::from_uuid(uuid);
        assert_eq!(session.as_uuid(), &uuid);
        assert_eq!(Uuid::from(session), uuid);
        assert_eq!(session.to_string(), uuid.to_string());
    }
}
