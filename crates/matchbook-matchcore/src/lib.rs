//! # matchbook-matchcore
//!
//! **Pure matching core for matchbook — zero I/O, fully deterministic.**
//!
//! Orders arrive one at a time, in strict feed order, and are processed
//! synchronously; there is no internal concurrency and no suspension
//! point. Two session kinds share the order model but run independently
//! (a process runs exactly one per invocation):
//!
//! - [`ContinuousEngine`]: price-time-size priority book; every arrival
//!   crosses the best bid against the best ask while they meet
//! - [`AuctionEngine`]: aggregated price levels; orders accumulate without
//!   executing, and every arrival refreshes the clearing-price estimate
//! - [`PositionLedger`]: per-party share/cash accounting with a zero-sum
//!   conservation check

pub mod auction;
pub mod book;
pub mod continuous;
pub mod ledger;
pub mod levels;

pub use auction::{AuctionEngine, Clearing};
pub use book::{Fill, PriorityBook};
pub use continuous::ContinuousEngine;
pub use ledger::PositionLedger;
pub use levels::{Level, PriceLevelBook};
