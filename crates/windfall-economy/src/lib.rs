//! In-game currency ledger.
//!
//! Two buckets: `uncollected` accrues from lever pulls, `collected` is the
//! player's banked total. A collect action moves the floored uncollected
//! amount into the bank atomically — there is no partial-collect state, and
//! the banked total never decreases.

use tracing::debug;

/// The currency ledger. Starts empty; mutated only by
/// [`credit`](Ledger::credit) and [`collect`](Ledger::collect).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    uncollected: f64,
    collected: u64,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accrues earnings into the uncollected bucket.
    pub fn credit(&mut self, amount: f64) {
        debug_assert!(amount >= 0.0, "credits are non-negative");
        self.uncollected += amount;
        debug!(amount, uncollected = self.uncollected, "ledger credit");
    }

    /// Transfers the uncollected bucket into the bank.
    ///
    /// Returns the transferred (floored) amount, or `None` if there was
    /// nothing to collect. Calling again immediately is a no-op, so the
    /// operation is idempotent once drained.
    pub fn collect(&mut self) -> Option<u64> {
        if self.uncollected <= 0.0 {
            return None;
        }
        let transferred = self.uncollected.floor() as u64;
        self.collected += transferred;
        self.uncollected = 0.0;
        debug!(transferred, collected = self.collected, "ledger collect");
        Some(transferred)
    }

    /// Earnings waiting to be collected.
    #[must_use]
    pub fn uncollected(&self) -> f64 {
        self.uncollected
    }

    /// Banked total. Monotonically non-decreasing.
    #[must_use]
    pub fn collected(&self) -> u64 {
        self.collected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert_eq!(ledger.uncollected(), 0.0);
        assert_eq!(ledger.collected(), 0);
    }

    #[test]
    fn test_credit_accumulates() {
        let mut ledger = Ledger::new();
        ledger.credit(50.0);
        ledger.credit(50.0);
        assert_eq!(ledger.uncollected(), 100.0);
        assert_eq!(ledger.collected(), 0, "credits never touch the bank");
    }

    #[test]
    fn test_collect_transfers_and_drains() {
        let mut ledger = Ledger::new();
        ledger.credit(150.0);
        assert_eq!(ledger.collect(), Some(150));
        assert_eq!(ledger.uncollected(), 0.0);
        assert_eq!(ledger.collected(), 150);
    }

    #[test]
    fn test_collect_twice_is_idempotent() {
        let mut ledger = Ledger::new();
        ledger.credit(50.0);
        ledger.collect();
        let banked = ledger.collected();
        assert_eq!(ledger.collect(), None);
        assert_eq!(ledger.collected(), banked);
        assert_eq!(ledger.uncollected(), 0.0);
    }

    #[test]
    fn test_collect_on_empty_is_noop() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.collect(), None);
        assert_eq!(ledger, Ledger::new());
    }

    #[test]
    fn test_fractional_earnings_floor_on_collect() {
        let mut ledger = Ledger::new();
        ledger.credit(12.75);
        assert_eq!(ledger.collect(), Some(12));
        assert_eq!(ledger.uncollected(), 0.0, "remainder is dropped, not carried");
    }

    #[test]
    fn test_collected_is_monotonic() {
        let mut ledger = Ledger::new();
        let mut previous = 0;
        for _ in 0..10 {
            ledger.credit(50.0);
            ledger.collect();
            assert!(ledger.collected() >= previous);
            previous = ledger.collected();
        }
        assert_eq!(previous, 500);
    }
}
