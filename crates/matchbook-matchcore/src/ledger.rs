//! Per-party position accounting.
//!
//! Every trade moves `quantity` shares from seller to buyer and
//! `price × quantity` cash the other way, so across all parties the
//! ledger always sums to zero on both axes. [`PositionLedger::verify_conservation`]
//! enforces that after a run; if it ever fails, a fill was dropped or
//! double-reported.

use std::collections::HashMap;

use matchbook_types::{MatchbookError, NetPosition, Party, Result};
use rust_decimal::Decimal;

/// Accumulates net positions per party plus the running traded volume.
///
/// The volume counter lives here, owned by the ledger and torn down with
/// it — there is no process-wide state.
#[derive(Debug, Default)]
pub struct PositionLedger {
    positions: HashMap<Party, NetPosition>,
    volume: i64,
}

impl PositionLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one fill. Pure accumulation with no failure modes; callers
    /// must report each fill exactly once.
    pub fn record_trade(&mut self, seller: &Party, buyer: &Party, price: Decimal, quantity: i64) {
        let proceeds = price * Decimal::from(quantity);

        let seller_pos = self.positions.entry(seller.clone()).or_default();
        seller_pos.shares -= quantity;
        seller_pos.earnings += proceeds;

        let buyer_pos = self.positions.entry(buyer.clone()).or_default();
        buyer_pos.shares += quantity;
        buyer_pos.earnings -= proceeds;

        self.volume += quantity;
    }

    /// Net position for a party. Parties that never traded are flat.
    #[must_use]
    pub fn position(&self, party: &Party) -> NetPosition {
        self.positions.get(party).copied().unwrap_or_default()
    }

    /// Total quantity traded since construction.
    #[must_use]
    pub fn volume(&self) -> i64 {
        self.volume
    }

    /// Number of parties touched by at least one trade.
    #[must_use]
    pub fn party_count(&self) -> usize {
        self.positions.len()
    }

    /// Snapshot of all positions, sorted by party so report output never
    /// depends on hash-map iteration order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(Party, NetPosition)> {
        let mut all: Vec<(Party, NetPosition)> = self
            .positions
            .iter()
            .map(|(party, pos)| (party.clone(), *pos))
            .collect();
        all.sort_by(|(a, _), (b, _)| a.cmp(b));
        all
    }

    /// Verify the zero-sum invariant: `Σ shares == 0` and
    /// `Σ earnings == 0` across all parties.
    ///
    /// # Errors
    /// Returns [`MatchbookError::PositionImbalance`] with the offending
    /// sums otherwise.
    pub fn verify_conservation(&self) -> Result<()> {
        let shares: i64 = self.positions.values().map(|p| p.shares).sum();
        let earnings: Decimal = self.positions.values().map(|p| p.earnings).sum();
        if shares != 0 || !earnings.is_zero() {
            return Err(MatchbookError::PositionImbalance { shares, earnings });
        }
        Ok(())
    }
}
