//! Priority order book for the continuous session.
//!
//! Each side is a `BinaryHeap` whose entry newtype carries that side's
//! ordering, fixed at the type level (there are exactly two orderings, so
//! no runtime comparator is needed):
//!
//! - **Bids** (`BidEntry`): highest price first
//! - **Asks** (`AskEntry`): lowest price first
//!
//! Ties on price go to the earlier timestamp; ties on price *and*
//! timestamp go to the larger quantity.
//!
//! The matcher decrements the top order's quantity in place through
//! `BinaryHeap::peek_mut`. This cannot reorder the book: timestamps are a
//! strictly increasing arrival sequence, so two distinct resting orders
//! never tie on both price and timestamp, and quantity never decides
//! their relative order. `PeekMut` re-sifts on drop regardless, so the
//! heap stays valid even if that assumption is ever relaxed.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::binary_heap::PeekMut;

use matchbook_types::{Order, OrderId, Party, Side};
use rust_decimal::Decimal;

/// Bid-side heap entry: the max element is the best bid.
#[derive(Debug, Clone)]
pub(crate) struct BidEntry(pub Order);

impl Ord for BidEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .price
            .cmp(&other.0.price)
            .then_with(|| other.0.timestamp.cmp(&self.0.timestamp))
            .then_with(|| self.0.quantity.cmp(&other.0.quantity))
    }
}

impl PartialOrd for BidEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BidEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BidEntry {}

/// Ask-side heap entry: the max element is the best ask.
#[derive(Debug, Clone)]
pub(crate) struct AskEntry(pub Order);

impl Ord for AskEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .price
            .cmp(&self.0.price)
            .then_with(|| other.0.timestamp.cmp(&self.0.timestamp))
            .then_with(|| self.0.quantity.cmp(&other.0.quantity))
    }
}

impl PartialOrd for AskEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for AskEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AskEntry {}

/// The outcome of one crossing step.
#[derive(Debug, Clone)]
pub struct Fill {
    pub buy_order: OrderId,
    pub buyer: Party,
    pub sell_order: OrderId,
    pub seller: Party,
    /// Execution price: the ask side's limit price.
    pub price: Decimal,
    pub quantity: i64,
}

/// Both sides of the continuous book. The book exclusively owns every
/// resting order; ownership leaves it only when a fill drives a quantity
/// to zero and the entry is popped.
#[derive(Debug, Default)]
pub struct PriorityBook {
    bids: BinaryHeap<BidEntry>,
    asks: BinaryHeap<AskEntry>,
}

impl PriorityBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rest an order on its side. The caller has already validated it.
    pub fn insert(&mut self, order: Order) {
        match order.side {
            Side::Buy => self.bids.push(BidEntry(order)),
            Side::Sell => self.asks.push(AskEntry(order)),
        }
    }

    /// Best (highest-priority) resting bid, or `None` if no bids.
    #[must_use]
    pub fn best_bid(&self) -> Option<&Order> {
        self.bids.peek().map(|e| &e.0)
    }

    /// Best (highest-priority) resting ask, or `None` if no asks.
    #[must_use]
    pub fn best_ask(&self) -> Option<&Order> {
        self.asks.peek().map(|e| &e.0)
    }

    #[must_use]
    pub fn bid_count(&self) -> usize {
        self.bids.len()
    }

    #[must_use]
    pub fn ask_count(&self) -> usize {
        self.asks.len()
    }

    /// Returns `true` if the book has no orders on either side.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// One crossing step: fill the best bid against the best ask if the
    /// bid price meets the ask price. Quantities are decremented in place
    /// at the heap tops; an exhausted order is popped so the next
    /// candidate on that side is fetched fresh. Returns `None` once the
    /// book no longer crosses (or either side is empty) — a normal steady
    /// state, not an error.
    pub fn cross_once(&mut self) -> Option<Fill> {
        let crosses = match (self.bids.peek(), self.asks.peek()) {
            (Some(bid), Some(ask)) => bid.0.price >= ask.0.price,
            _ => false,
        };
        if !crosses {
            return None;
        }
        let (Some(mut bid), Some(mut ask)) = (self.bids.peek_mut(), self.asks.peek_mut()) else {
            return None;
        };

        let quantity = bid.0.quantity.min(ask.0.quantity);
        let fill = Fill {
            buy_order: bid.0.id,
            buyer: bid.0.party.clone(),
            sell_order: ask.0.id,
            seller: ask.0.party.clone(),
            price: ask.0.price,
            quantity,
        };

        bid.0.quantity -= quantity;
        ask.0.quantity -= quantity;
        if bid.0.quantity == 0 {
            PeekMut::pop(bid);
        }
        if ask.0.quantity == 0 {
            PeekMut::pop(ask);
        }
        Some(fill)
    }
}

#[cfg(test)]
mod tests {
    use matchbook_types::{Order, Side};
    use rust_decimal::Decimal;

    use super::*;

    fn dec(units: i64, cents: u32) -> Decimal {
        Decimal::new(units * 100 + i64::from(cents), 2)
    }

    fn bid(id: u64, price: Decimal, qty: i64, ts: u64) -> Order {
        Order::dummy(id, Side::Buy, "b", price, qty, ts)
    }

    fn ask(id: u64, price: Decimal, qty: i64, ts: u64) -> Order {
        Order::dummy(id, Side::Sell, "s", price, qty, ts)
    }

    #[test]
    fn best_bid_is_highest_price() {
        let mut book = PriorityBook::new();
        book.insert(bid(1, dec(90, 0), 100, 1));
        book.insert(bid(2, dec(100, 0), 100, 2));
        book.insert(bid(3, dec(95, 0), 100, 3));
        assert_eq!(book.best_bid().map(|o| o.id.0), Some(2));
    }

    #[test]
    fn best_ask_is_lowest_price() {
        let mut book = PriorityBook::new();
        book.insert(ask(1, dec(110, 0), 100, 1));
        book.insert(ask(2, dec(101, 0), 100, 2));
        book.insert(ask(3, dec(105, 0), 100, 3));
        assert_eq!(book.best_ask().map(|o| o.id.0), Some(2));
    }

    #[test]
    fn same_price_earlier_timestamp_wins_both_sides() {
        let mut book = PriorityBook::new();
        book.insert(bid(1, dec(100, 0), 100, 5));
        book.insert(bid(2, dec(100, 0), 100, 3));
        assert_eq!(book.best_bid().map(|o| o.id.0), Some(2));

        book.insert(ask(3, dec(105, 0), 100, 7));
        book.insert(ask(4, dec(105, 0), 100, 6));
        assert_eq!(book.best_ask().map(|o| o.id.0), Some(4));
    }

    #[test]
    fn equal_price_and_timestamp_larger_quantity_wins() {
        // The feed never produces duplicate timestamps; the comparator
        // still defines the tie for completeness.
        let small = BidEntry(bid(1, dec(100, 0), 50, 9));
        let large = BidEntry(bid(2, dec(100, 0), 200, 9));
        assert!(large > small);

        let small = AskEntry(ask(3, dec(100, 0), 50, 9));
        let large = AskEntry(ask(4, dec(100, 0), 200, 9));
        assert!(large > small);
    }

    #[test]
    fn no_cross_when_bid_below_ask() {
        let mut book = PriorityBook::new();
        book.insert(bid(1, dec(73, 21), 100, 1));
        book.insert(ask(2, dec(76, 56), 200, 2));
        assert!(book.cross_once().is_none());
        assert_eq!(book.bid_count(), 1);
        assert_eq!(book.ask_count(), 1);
    }

    #[test]
    fn cross_fills_at_ask_price() {
        let mut book = PriorityBook::new();
        book.insert(ask(1, dec(76, 56), 200, 1));
        book.insert(bid(2, dec(85, 4), 100, 2));

        let fill = book.cross_once().unwrap();
        assert_eq!(fill.price, dec(76, 56));
        assert_eq!(fill.quantity, 100);
        assert_eq!(fill.sell_order.0, 1);
        assert_eq!(fill.buy_order.0, 2);

        // Bid exhausted, 100 left resting on the ask.
        assert_eq!(book.bid_count(), 0);
        assert_eq!(book.best_ask().map(|o| o.quantity), Some(100));
        assert!(book.cross_once().is_none());
    }

    #[test]
    fn equal_quantities_pop_both_sides() {
        let mut book = PriorityBook::new();
        book.insert(bid(1, dec(100, 0), 100, 1));
        book.insert(ask(2, dec(100, 0), 100, 2));
        let fill = book.cross_once().unwrap();
        assert_eq!(fill.quantity, 100);
        assert!(book.is_empty());
    }

    #[test]
    fn in_place_decrement_keeps_priority_order() {
        // Three bids at the same price; shrinking the front order's
        // quantity must not let a later arrival overtake it.
        let mut book = PriorityBook::new();
        book.insert(bid(1, dec(100, 0), 500, 1));
        book.insert(bid(2, dec(100, 0), 400, 2));
        book.insert(bid(3, dec(100, 0), 300, 3));

        book.insert(ask(4, dec(100, 0), 50, 4));
        book.cross_once().unwrap();
        // Order 1 partially filled in place; still the best bid.
        assert_eq!(book.best_bid().map(|o| o.id.0), Some(1));
        assert_eq!(book.best_bid().map(|o| o.quantity), Some(450));

        book.insert(ask(5, dec(100, 0), 450, 5));
        let fill = book.cross_once().unwrap();
        assert_eq!(fill.buy_order.0, 1, "front order finishes before #2");
        assert_eq!(book.best_bid().map(|o| o.id.0), Some(2));
    }
}
