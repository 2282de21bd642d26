//! Trade types produced by the continuous matching engine.
//!
//! A [`Trade`] is the immutable record of one fill between the best bid
//! and the best ask. Execution is always at the ask side's limit price.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{OrderId, Party};

/// One fill between a bid and an ask.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    /// Per-engine fill sequence, starting at 0.
    pub seq: u64,
    /// The bid side of the fill.
    pub buy_order: OrderId,
    pub buyer: Party,
    /// The ask side of the fill.
    pub sell_order: OrderId,
    pub seller: Party,
    /// Execution price: the ask side's limit price.
    pub price: Decimal,
    /// Executed quantity in shares.
    pub quantity: i64,
    /// Wall-clock annotation. Plays no part in any matching or ordering
    /// decision; the logical clock on [`crate::Order`] does.
    pub executed_at: DateTime<Utc>,
}

impl Trade {
    /// Notional value: price × quantity.
    #[must_use]
    pub fn notional(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

impl std::fmt::Display for Trade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Trade[{}] {} buys {} from {} @ {} = {}",
            self.seq,
            self.buyer,
            self.quantity,
            self.seller,
            self.price,
            self.notional(),
        )
    }
}
