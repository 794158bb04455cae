//! The award dispatcher: one pick, one leaf action.
//!
//! CHECK ORDER (fixed, documented, never reordered):
//!   1. OneIn5   → no award. Absolute priority, short-circuits everything.
//!   2. OneIn100 → big award.
//!   3. OneIn2   → left subtree, otherwise right subtree.
//!   4. Subtree: OneIn100 → rare, else OneIn5 → uncommon, else common.
//!
//! RULES:
//!   - Each check draws its own fresh bytes, so the order above defines
//!     the composed probabilities. Reordering changes them.
//!   - Exactly one registered action fires per successful pick.
//!   - A failed draw fires nothing and surfaces as an error.
//!   - No internal synchronization. Share an award across threads only
//!     behind a lock.

use crate::{
    config::AwardConfig,
    error::AwardResult,
    evaluator::{bytes_per_check, Evaluator, ReservoirEvaluator},
    rng::SecureSource,
    types::{Odds, Outcome, Side, Tier},
};
use rand::RngCore;

/// Worst-case bytes consumed by one traversal of the check order.
pub const MAX_PICK_BYTES: usize = bytes_per_check(Odds::OneIn5)
    + bytes_per_check(Odds::OneIn100)
    + bytes_per_check(Odds::OneIn2)
    + bytes_per_check(Odds::OneIn100)
    + bytes_per_check(Odds::OneIn5);

pub struct Award<E = ReservoirEvaluator<SecureSource>> {
    evaluator: E,
    config:    AwardConfig,
}

impl Award {
    /// Build an award backed by the OS secure source. Fills the
    /// reservoir eagerly so the award is ready immediately.
    pub fn new(config: AwardConfig) -> AwardResult<Self> {
        Self::with_source(config, SecureSource::default())
    }
}

impl<R: RngCore> Award<ReservoirEvaluator<R>> {
    pub fn with_source(config: AwardConfig, source: R) -> AwardResult<Self> {
        Ok(Self::with_evaluator(config, ReservoirEvaluator::new(source)?))
    }
}

impl<E: Evaluator> Award<E> {
    pub fn with_evaluator(config: AwardConfig, evaluator: E) -> Self {
        Self { evaluator, config }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Run one full decision traversal and fire the resulting action.
    pub fn pick(&mut self) -> AwardResult<()> {
        let outcome = self.decide()?;
        log::trace!("pick -> {outcome}");
        self.config.fire(outcome);
        Ok(())
    }

    fn decide(&mut self) -> AwardResult<Outcome> {
        if self.evaluator.is_one_in_5()? {
            return Ok(Outcome::NoAward);
        }
        if self.evaluator.is_one_in_100()? {
            return Ok(Outcome::BigAward);
        }
        let side = if self.evaluator.is_one_in_2()? {
            Side::Left
        } else {
            Side::Right
        };
        let tier = self.decide_tier()?;
        Ok(Outcome::Branch { side, tier })
    }

    fn decide_tier(&mut self) -> AwardResult<Tier> {
        if self.evaluator.is_one_in_100()? {
            Ok(Tier::Rare)
        } else if self.evaluator.is_one_in_5()? {
            Ok(Tier::Uncommon)
        } else {
            Ok(Tier::Common)
        }
    }
}
