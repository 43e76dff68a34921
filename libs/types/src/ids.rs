//! Unique identifier types for book entities
//!
//! Order ids arrive from the caller and are treated as opaque. Trade ids are
//! minted by the engine and use UUID v7 for time-sortable ordering, enabling
//! chronological queries over emitted trade records.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for an order
///
/// Supplied by the caller at order construction. The engine never generates
/// or validates these; it only carries them into trade records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Create an OrderId from a caller-supplied string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Unique identifier for a trade
///
/// Uses UUID v7 for time-based sorting and global trade sequence tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeId(Uuid);

impl TradeId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TradeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_from_str() {
        let id = OrderId::new("client-42");
        assert_eq!(id.as_str(), "client-42");
        assert_eq!(id.to_string(), "client-42");
    }

    #[test]
    fn test_order_id_serialization() {
        let id = OrderId::new("abc-001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc-001\"");

        let deserialized: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_trade_id_creation() {
        let id1 = TradeId::new();
        let id2 = TradeId::new();
        assert_ne!(id1, id2, "TradeIds should be unique");
    }

    #[test]
    fn test_trade_id_serialization() {
        let id = TradeId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: TradeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
