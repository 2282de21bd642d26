//! Continuous double-auction engine.
//!
//! Every arrival is inserted into the [`PriorityBook`] and the book is
//! then crossed until the best bid no longer meets the best ask. Each
//! fill executes at the ask side's limit price and is recorded in the
//! [`PositionLedger`] exactly once.

use chrono::Utc;
use matchbook_types::{Order, Result, Trade};

use crate::{PositionLedger, PriorityBook};

/// Matches a serialized order stream against a single instrument's book.
#[derive(Debug, Default)]
pub struct ContinuousEngine {
    book: PriorityBook,
    ledger: PositionLedger,
    fill_seq: u64,
}

impl ContinuousEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `order` and cross while crossable. Returns the fills this
    /// arrival produced, in execution order (possibly empty).
    ///
    /// # Errors
    /// Rejects orders with non-positive quantity or negative price before
    /// they touch the book.
    pub fn submit(&mut self, order: Order) -> Result<Vec<Trade>> {
        order.validate()?;
        self.book.insert(order);

        let mut trades = Vec::new();
        while let Some(fill) = self.book.cross_once() {
            self.ledger
                .record_trade(&fill.seller, &fill.buyer, fill.price, fill.quantity);
            let trade = Trade {
                seq: self.fill_seq,
                buy_order: fill.buy_order,
                buyer: fill.buyer,
                sell_order: fill.sell_order,
                seller: fill.seller,
                price: fill.price,
                quantity: fill.quantity,
                executed_at: Utc::now(),
            };
            self.fill_seq += 1;
            tracing::debug!(
                seq = trade.seq,
                buyer = %trade.buyer,
                seller = %trade.seller,
                price = %trade.price,
                qty = trade.quantity,
                "orders crossed"
            );
            trades.push(trade);
        }
        Ok(trades)
    }

    #[must_use]
    pub fn book(&self) -> &PriorityBook {
        &self.book
    }

    #[must_use]
    pub fn ledger(&self) -> &PositionLedger {
        &self.ledger
    }
}
