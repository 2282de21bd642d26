//! Per-party net position: share change and cash flow since the start of
//! the session.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net change for a single party. Both fields start at zero; a party
/// appears in the ledger on its first trade and is never removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetPosition {
    /// Shares bought minus shares sold.
    pub shares: i64,
    /// Cash received minus cash paid.
    pub earnings: Decimal,
}

impl NetPosition {
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.shares == 0 && self.earnings.is_zero()
    }
}
