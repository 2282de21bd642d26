//! Order types for the matchbook core.
//!
//! An [`Order`] is produced by the feed and handed to exactly one engine.
//! `quantity` is the only field that changes after construction: partial
//! fills decrement it while the order rests in a book.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MatchbookError, OrderId, Party, Result};

/// Which side of the book an order rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for Side {
    type Err = MatchbookError;

    /// Accepts exactly `BUY` or `SELL`. Anything else is rejected rather
    /// than defaulted — a stray carriage return in the side field must
    /// surface as an error, not as a silent sell.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            other => Err(MatchbookError::UnknownSide {
                token: other.to_string(),
            }),
        }
    }
}

/// A limit order for the single traded instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub party: Party,
    /// Limit price. Non-negative; `Decimal` is always finite.
    pub price: Decimal,
    /// Remaining quantity. Strictly positive while the order rests.
    pub quantity: i64,
    /// Logical arrival sequence, strictly increasing across the feed.
    /// Not wall time.
    pub timestamp: u64,
}

impl Order {
    /// Check the invariants the engines rely on. Wire-format problems are
    /// the feed's concern; this guards the constructed values themselves.
    pub fn validate(&self) -> Result<()> {
        if self.quantity <= 0 {
            return Err(MatchbookError::InvalidOrder {
                id: self.id,
                reason: format!("non-positive quantity {}", self.quantity),
            });
        }
        if self.price < Decimal::ZERO {
            return Err(MatchbookError::InvalidOrder {
                id: self.id,
                reason: format!("negative price {}", self.price),
            });
        }
        Ok(())
    }

    /// Remaining notional: price × remaining quantity.
    #[must_use]
    pub fn notional(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    #[must_use]
    pub fn is_buy(&self) -> bool {
        self.side == Side::Buy
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order[{}] {} {} {} @ {}",
            self.id, self.party, self.side, self.quantity, self.price,
        )
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Order {
    pub fn dummy(
        id: u64,
        side: Side,
        party: &str,
        price: Decimal,
        quantity: i64,
        timestamp: u64,
    ) -> Self {
        Self {
            id: OrderId(id),
            side,
            party: Party::new(party),
            price,
            quantity,
            timestamp,
        }
    }
}
