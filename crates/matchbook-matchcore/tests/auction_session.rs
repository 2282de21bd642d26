//! Integration test: auction clearing equivalences.
//!
//! The engine maintains its ask window and clearing estimate
//! incrementally. These tests pit that fast path against brute-force
//! recomputation from the accumulated book, across randomized flows.

use matchbook_matchcore::{AuctionEngine, Clearing, PriceLevelBook};
use matchbook_types::{Order, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

/// Reference clearing: evaluate every quoted candidate price in
/// `[lowest crossing ask, best bid]` with freshly computed cumulative
/// quantities, no early exit.
fn exhaustive_clearing(book: &PriceLevelBook) -> Option<Clearing> {
    let best_bid = book.best_bid()?;
    let floor = book.asks().first().map(|l| l.price).filter(|&a| a <= best_bid)?;

    let mut candidates: Vec<Decimal> = book
        .asks()
        .iter()
        .chain(book.bids().iter())
        .map(|l| l.price)
        .filter(|&p| p >= floor && p <= best_bid)
        .collect();
    candidates.sort_by(|a, b| b.cmp(a));
    candidates.dedup();

    let mut best: Option<Clearing> = None;
    for p in candidates {
        let supply: i64 = book
            .asks()
            .iter()
            .filter(|l| l.price <= p)
            .map(|l| l.quantity)
            .sum();
        let demand: i64 = book
            .bids()
            .iter()
            .filter(|l| l.price >= p)
            .map(|l| l.quantity)
            .sum();
        let notional = p * Decimal::from(supply.min(demand));
        if best.is_none_or(|c| notional > c.notional) {
            best = Some(Clearing { price: p, notional });
        }
    }
    best
}

/// Reference window: full rescan of the ask side against the best bid.
fn rescanned_window(book: &PriceLevelBook) -> (usize, i64) {
    let Some(best_bid) = book.best_bid() else {
        return (0, 0);
    };
    let below: Vec<&matchbook_matchcore::Level> = book
        .asks()
        .iter()
        .take_while(|l| l.price <= best_bid)
        .collect();
    (below.len(), below.iter().map(|l| l.quantity).sum())
}

fn random_order(rng: &mut StdRng, id: u64) -> Order {
    let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
    // Narrow price band so books cross often and levels merge often.
    let price = Decimal::new(rng.gen_range(95..106), 0);
    Order::dummy(id, side, "p", price, rng.gen_range(1..100), id)
}

#[test]
fn early_exit_matches_exhaustive_scan() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut engine = AuctionEngine::new();
        for i in 0..120u64 {
            let estimate = engine.submit(random_order(&mut rng, i + 1)).unwrap();
            let reference = exhaustive_clearing(engine.book());
            assert_eq!(
                estimate, reference,
                "seed {seed}, arrival {i}: incremental scan diverged"
            );
        }
    }
}

#[test]
fn cached_window_matches_full_rescan() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut engine = AuctionEngine::new();
        for i in 0..120u64 {
            engine.submit(random_order(&mut rng, i + 1)).unwrap();
            assert_eq!(
                engine.ask_window(),
                rescanned_window(engine.book()),
                "seed {seed}, arrival {i}: cached window diverged"
            );
        }
    }
}

#[test]
fn arrival_order_does_not_change_the_estimate() {
    let mut rng = StdRng::seed_from_u64(3);
    let orders: Vec<Order> = (0..80u64).map(|i| random_order(&mut rng, i + 1)).collect();

    let mut forward = AuctionEngine::new();
    for order in &orders {
        forward.submit(order.clone()).unwrap();
    }

    let mut reverse = AuctionEngine::new();
    for order in orders.iter().rev() {
        reverse.submit(order.clone()).unwrap();
    }

    // The accumulated books are identical, so the estimates must be too.
    assert_eq!(forward.clearing(), reverse.clearing());
    assert!(forward.clearing().is_some());
}

#[test]
fn estimate_recomputation_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut engine = AuctionEngine::new();
    for i in 0..60u64 {
        engine.submit(random_order(&mut rng, i + 1)).unwrap();
    }
    let first = engine.clearing();
    let second = engine.clearing();
    assert_eq!(first, second);
    assert!(first.is_some());
}
