//! Whole-session drivers.
//!
//! Each driver owns one engine, feeds it every record from the reader in
//! arrival order, and reduces the run to the session's result shape. Any
//! feed or core error aborts the run.

use std::io::BufRead;

use matchbook_matchcore::{AuctionEngine, ContinuousEngine};
use matchbook_types::{NetPosition, Party, Result};
use rust_decimal::Decimal;

use crate::reader::RecordReader;

/// Auction wire sentinel: no bid meets any ask.
pub const NO_TRADE: (Decimal, Decimal) = (Decimal::NEGATIVE_ONE, Decimal::NEGATIVE_ONE);

/// Final state of a continuous session.
#[derive(Debug, Clone)]
pub struct ContinuousReport {
    /// Net positions, sorted by party.
    pub positions: Vec<(Party, NetPosition)>,
    /// Total quantity traded.
    pub volume: i64,
}

/// Drive a continuous session to completion.
///
/// # Errors
/// Propagates feed errors and invalid orders; also fails if the final
/// ledger does not sum to zero.
pub fn run_continuous<R: BufRead>(reader: RecordReader<R>) -> Result<ContinuousReport> {
    let mut engine = ContinuousEngine::new();
    let mut orders = 0u64;
    for order in reader {
        engine.submit(order?)?;
        orders += 1;
    }
    engine.ledger().verify_conservation()?;

    let volume = engine.ledger().volume();
    tracing::info!(
        orders,
        volume,
        parties = engine.ledger().party_count(),
        "continuous session complete"
    );
    Ok(ContinuousReport {
        positions: engine.ledger().snapshot(),
        volume,
    })
}

/// Drive an auction session to completion and report the final clearing
/// estimate as `(matching price, max transaction amount)`, or [`NO_TRADE`]
/// when nothing crosses.
///
/// # Errors
/// Propagates feed errors and invalid orders.
pub fn run_auction<R: BufRead>(reader: RecordReader<R>) -> Result<(Decimal, Decimal)> {
    let mut engine = AuctionEngine::new();
    let mut estimate = None;
    for order in reader {
        estimate = engine.submit(order?)?;
    }
    tracing::info!(
        clearing = ?estimate,
        ask_levels = engine.book().ask_depth(),
        bid_levels = engine.book().bid_depth(),
        "auction session complete"
    );
    Ok(estimate.map_or(NO_TRADE, |c| (c.price, c.notional)))
}
