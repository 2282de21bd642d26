//! Identifiers used throughout matchbook.
//!
//! The feed assigns order IDs; the core never mints its own. Parties are
//! opaque strings carried through from the wire format.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// OrderId
// ---------------------------------------------------------------------------

/// Feed-assigned order identifier. Unique for the lifetime of a run,
/// assigned in arrival order, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Party
// ---------------------------------------------------------------------------

/// Opaque party identifier (e.g. a short account mnemonic).
///
/// Ordering is lexicographic and used only to keep report output
/// deterministic — it never participates in matching decisions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Party(pub String);

impl Party {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_display() {
        assert_eq!(format!("{}", OrderId(70_000_001)), "70000001");
    }

    #[test]
    fn party_ordering_is_lexicographic() {
        assert!(Party::new("Kaylee") < Party::new("Mal"));
        assert!(Party::new("Mal") < Party::new("Wash"));
    }

    #[test]
    fn serde_roundtrips() {
        let id = OrderId(42);
        let json = serde_json::to_string(&id).unwrap();
        let back: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);

        let party = Party::new("River");
        let json = serde_json::to_string(&party).unwrap();
        let back: Party = serde_json::from_str(&json).unwrap();
        assert_eq!(party, back);
    }
}
