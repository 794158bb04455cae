//! Shared primitive types used across the dispatcher.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of rare-event probabilities the evaluator supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Odds {
    OneIn2,
    OneIn5,
    OneIn100,
}

impl Odds {
    pub const ALL: [Odds; 3] = [Odds::OneIn2, Odds::OneIn5, Odds::OneIn100];

    pub const fn modulus(self) -> u32 {
        match self {
            Self::OneIn2   => 2,
            Self::OneIn5   => 5,
            Self::OneIn100 => 100,
        }
    }

    pub fn probability(self) -> f64 {
        1.0 / f64::from(self.modulus())
    }
}

/// Which subtree a non-terminal top-level decision descends into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

/// Leaf tier inside a subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// 1% of the subtree.
    Rare,
    /// 20% of what remains after the rare check.
    Uncommon,
    /// Everything else.
    Common,
}

/// The eight leaves of the decision tree. Exactly one is reached per pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    NoAward,
    BigAward,
    Branch { side: Side, tier: Tier },
}

impl Outcome {
    /// Stable slot order, used for counters and reports.
    /// NEVER reorder, only append.
    pub const ALL: [Outcome; 8] = [
        Outcome::NoAward,
        Outcome::BigAward,
        Outcome::Branch { side: Side::Left,  tier: Tier::Rare },
        Outcome::Branch { side: Side::Left,  tier: Tier::Uncommon },
        Outcome::Branch { side: Side::Left,  tier: Tier::Common },
        Outcome::Branch { side: Side::Right, tier: Tier::Rare },
        Outcome::Branch { side: Side::Right, tier: Tier::Uncommon },
        Outcome::Branch { side: Side::Right, tier: Tier::Common },
    ];

    pub const fn index(self) -> usize {
        match self {
            Self::NoAward  => 0,
            Self::BigAward => 1,
            Self::Branch { side, tier } => {
                let base = match side {
                    Side::Left  => 2,
                    Side::Right => 5,
                };
                base + match tier {
                    Tier::Rare     => 0,
                    Tier::Uncommon => 1,
                    Tier::Common   => 2,
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::NoAward  => "no_award",
            Self::BigAward => "big_award",
            Self::Branch { side: Side::Left,  tier: Tier::Rare }     => "left_rare",
            Self::Branch { side: Side::Left,  tier: Tier::Uncommon } => "left_uncommon",
            Self::Branch { side: Side::Left,  tier: Tier::Common }   => "left_common",
            Self::Branch { side: Side::Right, tier: Tier::Rare }     => "right_rare",
            Self::Branch { side: Side::Right, tier: Tier::Uncommon } => "right_uncommon",
            Self::Branch { side: Side::Right, tier: Tier::Common }   => "right_common",
        }
    }

    /// Exact probability of reaching this leaf on one pick, composed
    /// along the fixed check order of the decision tree.
    pub fn expected_share(self) -> f64 {
        let no_award = Odds::OneIn5.probability();
        let big = Odds::OneIn100.probability();
        let half = Odds::OneIn2.probability();
        let past_top = (1.0 - no_award) * (1.0 - big);
        match self {
            Self::NoAward  => no_award,
            Self::BigAward => (1.0 - no_award) * big,
            Self::Branch { tier, .. } => {
                let side = past_top * half;
                let rare = Odds::OneIn100.probability();
                let uncommon = Odds::OneIn5.probability();
                match tier {
                    Tier::Rare     => side * rare,
                    Tier::Uncommon => side * (1.0 - rare) * uncommon,
                    Tier::Common   => side * (1.0 - rare) * (1.0 - uncommon),
                }
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
