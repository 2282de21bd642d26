//! Call-auction clearing engine.
//!
//! Orders accumulate in a [`PriceLevelBook`] without executing. After
//! every arrival the engine recomputes the price that would maximize
//! executed notional if the auction closed now; the external driver reads
//! the final estimate once the feed ends.
//!
//! ## Incremental ask window
//!
//! The clearing scan is seeded from two values maintained across
//! arrivals instead of rescanning the ask side:
//!
//! - `ask_window_end` — index of the first ask level priced strictly
//!   above the best bid;
//! - `ask_window_qty` — total ask quantity below that index.
//!
//! `refresh_window` walks the boundary in whichever direction the best
//! bid moved, so a shrinking window is handled the same way as a growing
//! one.

use matchbook_types::{Order, Result, Side};
use rust_decimal::Decimal;

use crate::PriceLevelBook;

/// A clearing estimate: the candidate price and the notional it would
/// execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clearing {
    pub price: Decimal,
    /// `price × min(supply at or below price, demand at or above price)`.
    pub notional: Decimal,
}

/// Accumulates one instrument's order flow for a single call auction.
#[derive(Debug, Default)]
pub struct AuctionEngine {
    book: PriceLevelBook,
    ask_window_end: usize,
    ask_window_qty: i64,
}

impl AuctionEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the order and return the refreshed clearing estimate.
    /// `None` means no bid meets any ask yet — a legitimate steady state.
    ///
    /// # Errors
    /// Rejects orders with non-positive quantity or negative price before
    /// they touch the book.
    pub fn submit(&mut self, order: Order) -> Result<Option<Clearing>> {
        order.validate()?;
        match order.side {
            Side::Sell => {
                let (idx, created) = self.book.add(Side::Sell, order.price, order.quantity);
                if idx < self.ask_window_end {
                    // Strictly inside the window: every level before the
                    // boundary is already at or below the best bid.
                    self.ask_window_qty += order.quantity;
                    if created {
                        self.ask_window_end += 1;
                    }
                } else {
                    // At or past the boundary; let the walk decide.
                    self.refresh_window();
                }
            }
            Side::Buy => {
                self.book.add(Side::Buy, order.price, order.quantity);
                self.refresh_window();
            }
        }
        Ok(self.clearing())
    }

    /// Re-walk the window boundary against the current best bid. Both
    /// directions, so the maintenance stays correct even if a future
    /// change lets the best bid fall.
    fn refresh_window(&mut self) {
        let Some(best_bid) = self.book.best_bid() else {
            self.ask_window_end = 0;
            self.ask_window_qty = 0;
            return;
        };
        let asks = self.book.asks();
        while self.ask_window_end < asks.len() && asks[self.ask_window_end].price <= best_bid {
            self.ask_window_qty += asks[self.ask_window_end].quantity;
            self.ask_window_end += 1;
        }
        while self.ask_window_end > 0 && asks[self.ask_window_end - 1].price > best_bid {
            self.ask_window_end -= 1;
            self.ask_window_qty -= asks[self.ask_window_end].quantity;
        }
    }

    /// The cached ask window: index of the first ask level priced above
    /// the best bid, and the total ask quantity below that index.
    #[must_use]
    pub fn ask_window(&self) -> (usize, i64) {
        (self.ask_window_end, self.ask_window_qty)
    }

    #[must_use]
    pub fn book(&self) -> &PriceLevelBook {
        &self.book
    }

    /// Current clearing estimate.
    ///
    /// Walks candidate prices downward from the best bid `b`, restricted
    /// to prices quoted in either book within `[a, b]` where `a` is the
    /// lowest crossing ask — executable quantity is piecewise constant
    /// between quoted prices, so no other price can host a maximum. At
    /// each candidate `p` the cumulative windows are advanced rather than
    /// recomputed:
    ///
    /// - supply = Σ ask quantity at price ≤ p (seeded from the cached
    ///   window, shed as `p` drops past ask levels)
    /// - demand = Σ bid quantity at price ≥ p (accumulated as `p` drops
    ///   past bid levels)
    ///
    /// The first (highest) price achieving the maximum
    /// `p × min(supply, demand)` wins. Once supply no longer exceeds
    /// demand the scan stops: from there on the binding quantity is the
    /// supply, which only shrinks as `p` falls, and `p` itself falls, so
    /// the product cannot recover.
    #[must_use]
    pub fn clearing(&self) -> Option<Clearing> {
        let best_bid = self.book.best_bid()?;
        if self.ask_window_end == 0 {
            // No ask at or below the best bid: nothing crosses.
            return None;
        }
        let asks = &self.book.asks()[..self.ask_window_end];
        let bids = self.book.bids();
        let floor = asks[0].price;

        let mut ask_ptr = asks.len();
        let mut supply = self.ask_window_qty;
        let mut bid_ptr = 0;
        let mut demand = 0i64;
        let mut best: Option<Clearing> = None;

        let mut candidate = Some(best_bid);
        while let Some(p) = candidate {
            while ask_ptr > 0 && asks[ask_ptr - 1].price > p {
                ask_ptr -= 1;
                supply -= asks[ask_ptr].quantity;
            }
            while bid_ptr < bids.len() && bids[bid_ptr].price >= p {
                demand += bids[bid_ptr].quantity;
                bid_ptr += 1;
            }

            let notional = p * Decimal::from(supply.min(demand));
            if best.is_none_or(|c| notional > c.notional) {
                best = Some(Clearing { price: p, notional });
            }
            if supply <= demand {
                break;
            }

            // Next candidate: the highest quoted price strictly below p.
            let next_ask = if ask_ptr > 0 && asks[ask_ptr - 1].price == p {
                asks[..ask_ptr - 1].last().map(|l| l.price)
            } else {
                asks[..ask_ptr].last().map(|l| l.price)
            };
            let next_bid = bids.get(bid_ptr).map(|l| l.price);
            candidate = match (next_ask, next_bid) {
                (Some(a), Some(b)) => Some(a.max(b)),
                (ask_only, None) => ask_only,
                (None, bid_only) => bid_only,
            }
            .filter(|&p| p >= floor);
        }
        best
    }
}
