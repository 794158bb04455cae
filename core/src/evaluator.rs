//! Probability evaluation over reservoir draws.
//!
//! Every check consumes its own fresh bytes:
//!   - OneIn2:   one little-endian u32; the event occurs iff it is even.
//!               Exact, since 2 divides 2^32.
//!   - OneIn5,
//!     OneIn100: two independent u32 words, each reduced mod N; the event
//!               occurs iff the residues are equal. Both words share the
//!               same residue distribution, so the equality test stays at
//!               1/N up to a term below 2^-60.

use crate::{error::AwardResult, reservoir::Reservoir, types::Odds};
use rand::RngCore;

/// Width of one unbiased integer drawn from the reservoir.
pub const WORD_LEN: usize = 4;

/// Bytes one check at the given odds consumes.
pub const fn bytes_per_check(odds: Odds) -> usize {
    match odds {
        Odds::OneIn2 => WORD_LEN,
        Odds::OneIn5 | Odds::OneIn100 => 2 * WORD_LEN,
    }
}

/// Largest single draw any check requests.
pub const MAX_CHECK_BYTES: usize = 2 * WORD_LEN;

/// Decides whether a rare event at fixed odds occurred.
pub trait Evaluator {
    fn occurs(&mut self, odds: Odds) -> AwardResult<bool>;

    fn is_one_in_2(&mut self) -> AwardResult<bool> {
        self.occurs(Odds::OneIn2)
    }

    fn is_one_in_5(&mut self) -> AwardResult<bool> {
        self.occurs(Odds::OneIn5)
    }

    fn is_one_in_100(&mut self) -> AwardResult<bool> {
        self.occurs(Odds::OneIn100)
    }
}

/// The canonical evaluator, backed by a reservoir over a secure source.
#[derive(Debug)]
pub struct ReservoirEvaluator<R> {
    reservoir: Reservoir<R>,
}

impl<R: RngCore> ReservoirEvaluator<R> {
    /// Wrap a source and fill the reservoir eagerly, so the first pick
    /// does not pay for the refill.
    pub fn new(source: R) -> AwardResult<Self> {
        let mut reservoir = Reservoir::new(source);
        reservoir.refill()?;
        Ok(Self { reservoir })
    }

    pub fn reservoir(&self) -> &Reservoir<R> {
        &self.reservoir
    }
}

impl<R: RngCore> Evaluator for ReservoirEvaluator<R> {
    fn occurs(&mut self, odds: Odds) -> AwardResult<bool> {
        match odds {
            Odds::OneIn2 => {
                let word = u32::from_le_bytes(self.reservoir.draw::<WORD_LEN>()?);
                Ok(is_even(word))
            }
            Odds::OneIn5 | Odds::OneIn100 => {
                let bytes = self.reservoir.draw::<MAX_CHECK_BYTES>()?;
                let (a, b) = split_words(bytes);
                Ok(residues_match(a, b, odds.modulus()))
            }
        }
    }
}

fn is_even(word: u32) -> bool {
    word & 1 == 0
}

fn split_words(bytes: [u8; MAX_CHECK_BYTES]) -> (u32, u32) {
    let a = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let b = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    (a, b)
}

fn residues_match(a: u32, b: u32, modulus: u32) -> bool {
    a % modulus == b % modulus
}
