//! Core identifier newtypes with smart constructors.
//!
//! All identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Unique identifier for an item within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Smart constructor: rejects empty or whitespace-only ids.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidItemId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidItemId::Empty);
        }
        Ok(Self(raw))
    }

    /// The raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ItemId::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Identifier of an expandable node (tree folder, accordion panel).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    /// Smart constructor: rejects empty or whitespace-only ids.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidNodeId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidNodeId::Empty);
        }
        Ok(Self(raw))
    }

    /// The raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

/// Rejected item id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidItemId {
    /// Id was empty or only whitespace.
    #[error("Item ID cannot be empty")]
    Empty,
}

/// Rejected node id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidNodeId {
    /// Id was empty or only whitespace.
    #[error("Node ID cannot be empty")]
    Empty,
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_accepts_simple_alphanumeric() {
        let id = ItemId::new("card-07");
        assert!(id.is_ok(), "Simple id should be accepted");
    }

    #[test]
    fn item_id_rejects_empty_string() {
        assert_eq!(ItemId::new(""), Err(InvalidItemId::Empty));
    }

    #[test]
    fn item_id_rejects_whitespace() {
        assert_eq!(ItemId::new("   "), Err(InvalidItemId::Empty));
    }

    #[test]
    fn item_id_display_returns_inner_string() {
        let id = ItemId::new("photo-3").expect("valid id");
        assert_eq!(id.to_string(), "photo-3");
        assert_eq!(id.as_str(), "photo-3");
    }

    #[test]
    fn item_id_deserialize_rejects_empty() {
        let result: Result<ItemId, _> = serde_json::from_str("\"\"");
        assert!(
            result.is_err(),
            "Empty id in JSON should fail to deserialize"
        );
    }

    #[test]
    fn item_id_deserialize_accepts_string() {
        let id: ItemId = serde_json::from_str("\"a1\"").expect("valid id");
        assert_eq!(id.as_str(), "a1");
    }

    #[test]
    fn node_id_rejects_empty_string() {
        assert_eq!(NodeId::new(""), Err(InvalidNodeId::Empty));
    }

    #[test]
    fn node_id_orders_lexicographically() {
        let a = NodeId::new("public").expect("valid");
        let b = NodeId::new("src").expect("valid");
        assert!(a < b);
    }
}
