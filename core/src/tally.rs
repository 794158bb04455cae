//! Outcome counters for instrumenting an award.
//!
//! A `Tally` hands out recorder actions that bump a shared atomic counter,
//! so it can observe an award that lives on another thread.

use crate::{config::AwardConfig, types::Outcome};
use serde::Serialize;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

#[derive(Clone, Debug, Default)]
pub struct Tally {
    counts: Arc<[AtomicU64; Outcome::ALL.len()]>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// An action that counts one hit for `outcome`.
    pub fn recorder(&self, outcome: Outcome) -> impl FnMut() + Send + 'static {
        let counts = Arc::clone(&self.counts);
        move || {
            counts[outcome.index()].fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Register a recorder in every slot of `config`, replacing whatever
    /// was there.
    pub fn instrument(&self, mut config: AwardConfig) -> AwardConfig {
        for outcome in Outcome::ALL {
            *config.slot_mut(outcome) = Some(Box::new(self.recorder(outcome)));
        }
        config
    }

    pub fn count(&self, outcome: Outcome) -> u64 {
        self.counts[outcome.index()].load(Ordering::Relaxed)
    }

    pub fn total(&self) -> u64 {
        Outcome::ALL.iter().map(|o| self.count(*o)).sum()
    }

    pub fn share(&self, outcome: Outcome) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(outcome) as f64 / total as f64,
        }
    }

    pub fn report(&self) -> TallyReport {
        let rows = Outcome::ALL
            .iter()
            .map(|&outcome| TallyRow {
                outcome:  outcome.name(),
                count:    self.count(outcome),
                observed: self.share(outcome),
                expected: outcome.expected_share(),
            })
            .collect();
        TallyReport { total: self.total(), rows }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TallyRow {
    pub outcome:  &'static str,
    pub count:    u64,
    pub observed: f64,
    pub expected: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TallyReport {
    pub total: u64,
    pub rows:  Vec<TallyRow>,
}

impl TallyReport {
    /// Largest absolute gap between observed and expected share.
    pub fn max_deviation(&self) -> f64 {
        self.rows
            .iter()
            .map(|r| (r.observed - r.expected).abs())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorders_count_their_own_outcome() {
        let tally = Tally::new();
        let mut big = tally.recorder(Outcome::BigAward);
        big();
        big();
        assert_eq!(tally.count(Outcome::BigAward), 2);
        assert_eq!(tally.count(Outcome::NoAward), 0);
        assert_eq!(tally.total(), 2);
    }

    #[test]
    fn expected_shares_sum_to_one() {
        let sum: f64 = Outcome::ALL.iter().map(|o| o.expected_share()).sum();
        assert!((sum - 1.0).abs() < 1e-12, "shares sum to {sum}");
    }

    #[test]
    fn empty_tally_reports_zero_shares() {
        let report = Tally::new().report();
        assert_eq!(report.total, 0);
        assert!(report.rows.iter().all(|r| r.observed == 0.0));
    }
}
