//! Opaque identifiers supplied by the persistence layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque, equality-comparable entity key.
///
/// The engine never interprets the contents; numeric database keys and
/// UUIDs are both carried as their string form.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Create a new EntityId from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for EntityId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

/// Type alias for team IDs
pub type TeamId = EntityId;

/// Type alias for division IDs
pub type DivisionId = EntityId;

/// Type alias for venue (stadium) IDs
pub type VenueId = EntityId;

/// Type alias for player IDs
pub type PlayerId = EntityId;

/// Type alias for match IDs
pub type MatchId = EntityId;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_serializes_as_plain_string() {
        let id = EntityId::from("team-7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"team-7\"");

        let parsed: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_entity_id_from_number() {
        let id = EntityId::from(42u64);
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_entity_id_display() {
        let id = EntityId::new("abc123");
        assert_eq!(format!("{}", id), "abc123");
    }

    #[test]
    fn test_entity_id_debug() {
        let id = EntityId::new("debug-test");
        assert!(format!("{:?}", id).contains("debug-test"));
    }

    #[test]
    fn test_entity_id_equality() {
        assert_eq!(EntityId::from("same"), EntityId::from("same".to_string()));
        assert_ne!(EntityId::from("same"), EntityId::from("different"));
    }

    #[test]
    fn test_entity_id_ordering_is_lexical() {
        let mut ids = vec![EntityId::from("b"), EntityId::from("a")];
        ids.sort();
        assert_eq!(ids[0].as_str(), "a");
    }
}
