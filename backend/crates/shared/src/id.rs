//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// ```
pub struct Id<T> {
    value: uuid::Uuid,
    _marker: PhantomData<T>,
}

// Manual impls: derives would bound `T`, but the marker is phantom and
// never needs to be Clone/Copy/Eq itself.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
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

impl<T> FromStr for Id<T> {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self::from_uuid)
    }
}

// Serialized as the plain UUID string; the marker carries no data.
impl<T> serde::Serialize for Id<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T> serde::Deserialize<'de> for Id<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Uuid::deserialize(deserializer).map(Self::from_uuid)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;

    /// Marker for Product IDs
    pub struct Product;

    /// Marker for Order IDs
    pub struct Order;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type ProductId = Id<markers::Product>;
pub type OrderId = Id<markers::Order>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let user_id: UserId = Id::new();
        let product_id: ProductId = Id::new();

        // These are different types, cannot be mixed
        let _u: Uuid = user_id.into_uuid();
        let _p: Uuid = product_id.into_uuid();
    }

    #[test]
    fn test_id_is_copy_and_comparable() {
        // Marker types carry no impls of their own; Id must still copy
        // and compare through the phantom parameter.
        fn assert_copy<C: Copy>(_: C) {}

        let id: UserId = Id::new();
        assert_copy(id);

        let copied = id;
        assert_eq!(id, copied);
        assert_ne!(id, UserId::new());

        let mut set = std::collections::HashSet::new();
        set.insert(id);
        assert!(set.contains(&copied));
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: UserId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_id_parse_roundtrip() {
        let id: OrderId = Id::new();
        let parsed: OrderId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_id_serde_as_uuid_string() {
        let id: ProductId = Id::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));

        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
