//! Award configuration: which action runs for which leaf.
//!
//! Every slot is optional. An unset slot is skipped when its leaf is
//! reached, which behaves exactly like a no-op action.

use crate::types::{Outcome, Side, Tier};
use std::fmt;

/// An opaque, zero-argument leaf action.
pub type Action = Box<dyn FnMut() + Send>;

/// The rare / uncommon / common actions of one subtree.
#[derive(Default)]
pub struct BranchActions {
    pub rare:     Option<Action>,
    pub uncommon: Option<Action>,
    pub common:   Option<Action>,
}

impl BranchActions {
    pub fn new<A, B, C>(rare: A, uncommon: B, common: C) -> Self
    where
        A: FnMut() + Send + 'static,
        B: FnMut() + Send + 'static,
        C: FnMut() + Send + 'static,
    {
        Self {
            rare:     Some(Box::new(rare)),
            uncommon: Some(Box::new(uncommon)),
            common:   Some(Box::new(common)),
        }
    }

    fn slot_mut(&mut self, tier: Tier) -> &mut Option<Action> {
        match tier {
            Tier::Rare     => &mut self.rare,
            Tier::Uncommon => &mut self.uncommon,
            Tier::Common   => &mut self.common,
        }
    }
}

/// Write-once action registry, built before the award and never
/// changed afterwards.
#[derive(Default)]
pub struct AwardConfig {
    pub big_award: Option<Action>,
    pub no_award:  Option<Action>,
    pub left:      BranchActions,
    pub right:     BranchActions,
}

impl AwardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn big_award(mut self, action: impl FnMut() + Send + 'static) -> Self {
        self.big_award = Some(Box::new(action));
        self
    }

    pub fn no_award(mut self, action: impl FnMut() + Send + 'static) -> Self {
        self.no_award = Some(Box::new(action));
        self
    }

    pub fn left(
        mut self,
        rare:     impl FnMut() + Send + 'static,
        uncommon: impl FnMut() + Send + 'static,
        common:   impl FnMut() + Send + 'static,
    ) -> Self {
        self.left = BranchActions::new(rare, uncommon, common);
        self
    }

    pub fn right(
        mut self,
        rare:     impl FnMut() + Send + 'static,
        uncommon: impl FnMut() + Send + 'static,
        common:   impl FnMut() + Send + 'static,
    ) -> Self {
        self.right = BranchActions::new(rare, uncommon, common);
        self
    }

    /// Set the action for a single leaf.
    pub fn on(mut self, outcome: Outcome, action: impl FnMut() + Send + 'static) -> Self {
        *self.slot_mut(outcome) = Some(Box::new(action));
        self
    }

    pub(crate) fn slot_mut(&mut self, outcome: Outcome) -> &mut Option<Action> {
        match outcome {
            Outcome::NoAward  => &mut self.no_award,
            Outcome::BigAward => &mut self.big_award,
            Outcome::Branch { side: Side::Left,  tier } => self.left.slot_mut(tier),
            Outcome::Branch { side: Side::Right, tier } => self.right.slot_mut(tier),
        }
    }

    /// Run the action registered for `outcome`, if any.
    pub(crate) fn fire(&mut self, outcome: Outcome) {
        if let Some(action) = self.slot_mut(outcome) {
            action();
        }
    }
}

impl fmt::Debug for AwardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for outcome in Outcome::ALL {
            let registered = match outcome {
                Outcome::NoAward  => self.no_award.is_some(),
                Outcome::BigAward => self.big_award.is_some(),
                Outcome::Branch { side, tier } => {
                    let branch = match side {
                        Side::Left  => &self.left,
                        Side::Right => &self.right,
                    };
                    match tier {
                        Tier::Rare     => branch.rare.is_some(),
                        Tier::Uncommon => branch.uncommon.is_some(),
                        Tier::Common   => branch.common.is_some(),
                    }
                }
            };
            if registered {
                set.entry(&outcome.name());
            }
        }
        set.finish()
    }
}
