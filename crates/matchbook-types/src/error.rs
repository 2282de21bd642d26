//! Error types for matchbook.
//!
//! All errors use the `MB_ERR_` prefix convention for easy grepping in
//! logs. Error codes are grouped by subsystem:
//! - 1xx: order invariants
//! - 2xx: feed / record parsing
//! - 8xx: accounting invariants
//! - 9xx: general / internal

use rust_decimal::Decimal;
use thiserror::Error;

use crate::OrderId;

/// Central error enum for all matchbook operations.
#[derive(Debug, Error)]
pub enum MatchbookError {
    // =================================================================
    // Order Errors (1xx)
    // =================================================================
    /// The order violates a core invariant (non-positive quantity,
    /// negative price). The feed never produces these from well-formed
    /// records; the engines fail fast rather than accept one.
    #[error("MB_ERR_100: invalid order {id}: {reason}")]
    InvalidOrder { id: OrderId, reason: String },

    // =================================================================
    // Feed Errors (2xx)
    // =================================================================
    /// A record on the wire did not match the expected grammar.
    /// Fatal for the whole run.
    #[error("MB_ERR_200: line {line}: malformed record: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// The side field was neither `BUY` nor `SELL`.
    #[error("MB_ERR_201: unknown side token `{token}` (expected BUY or SELL)")]
    UnknownSide { token: String },

    // =================================================================
    // Accounting Errors (8xx)
    // =================================================================
    /// The position ledger no longer sums to zero across all parties.
    /// Trades move shares and cash between parties without creating or
    /// destroying either, so this can only mean a double-reported or
    /// dropped fill.
    #[error("MB_ERR_800: position imbalance: net shares {shares}, net earnings {earnings}")]
    PositionImbalance { shares: i64, earnings: Decimal },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// I/O error while reading the feed.
    #[error("MB_ERR_900: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, MatchbookError>;

// Conversion from std::io::Error
impl From<std::io::Error> for MatchbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
