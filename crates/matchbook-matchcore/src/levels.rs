//! Aggregated price levels for the call-auction book.
//!
//! Unlike the continuous book, the auction never needs individual orders:
//! all quantity quoted at one price clears together or not at all. Each
//! side keeps one [`Level`] per distinct price, asks ascending and bids
//! descending, so index 0 is always that side's best price.

use matchbook_types::Side;
use rust_decimal::Decimal;

/// One aggregated (price, quantity) level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub price: Decimal,
    pub quantity: i64,
}

/// Both sides of the auction book.
#[derive(Debug, Default)]
pub struct PriceLevelBook {
    /// Ascending by price.
    asks: Vec<Level>,
    /// Descending by price.
    bids: Vec<Level>,
}

impl PriceLevelBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `quantity` into the level at `price`, creating the level in
    /// sorted position if absent. Returns the level's index on its side
    /// and whether it was newly created.
    pub fn add(&mut self, side: Side, price: Decimal, quantity: i64) -> (usize, bool) {
        match side {
            Side::Buy => Self::merge(&mut self.bids, price, quantity, |l| price.cmp(&l.price)),
            Side::Sell => Self::merge(&mut self.asks, price, quantity, |l| l.price.cmp(&price)),
        }
    }

    fn merge(
        levels: &mut Vec<Level>,
        price: Decimal,
        quantity: i64,
        probe: impl FnMut(&Level) -> std::cmp::Ordering,
    ) -> (usize, bool) {
        match levels.binary_search_by(probe) {
            Ok(idx) => {
                levels[idx].quantity += quantity;
                (idx, false)
            }
            Err(idx) => {
                levels.insert(idx, Level { price, quantity });
                (idx, true)
            }
        }
    }

    /// Ask levels, ascending by price.
    #[must_use]
    pub fn asks(&self) -> &[Level] {
        &self.asks
    }

    /// Bid levels, descending by price.
    #[must_use]
    pub fn bids(&self) -> &[Level] {
        &self.bids
    }

    /// Highest bid price, or `None` if no bids.
    #[must_use]
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|l| l.price)
    }

    /// Lowest ask price, or `None` if no asks.
    #[must_use]
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|l| l.price)
    }

    #[must_use]
    pub fn ask_depth(&self) -> usize {
        self.asks.len()
    }

    #[must_use]
    pub fn bid_depth(&self) -> usize {
        self.bids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.asks.is_empty() && self.bids.is_empty()
    }
}
