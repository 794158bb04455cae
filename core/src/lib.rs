//! Probabilistic award dispatcher.
//!
//! Draws from a buffered secure randomness reservoir, walks a fixed
//! decision tree of rare-event checks and fires exactly one registered
//! leaf action per pick.

pub mod award;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod reservoir;
pub mod rng;
pub mod tally;
pub mod types;

pub use award::Award;
pub use config::{Action, AwardConfig, BranchActions};
pub use error::{AwardError, AwardResult};
pub use evaluator::{Evaluator, ReservoirEvaluator};
pub use reservoir::{Reservoir, RESERVOIR_LEN};
pub use rng::{SecureSource, SeededSource};
pub use tally::{Tally, TallyReport};
pub use types::{Odds, Outcome, Side, Tier};
