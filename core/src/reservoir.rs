//! Buffered pool of secure random bytes, refilled in bulk.
//!
//! RULES:
//!   - Bytes are consumed from the front; `remaining` counts the
//!     unconsumed tail. 0 <= remaining <= RESERVOIR_LEN.
//!   - A draw of N bytes refills first when remaining <= N, so a draw
//!     that would exactly exhaust the buffer is served from fresh bytes.
//!   - A byte is served at most once per refill.
//!   - A failed refill empties the reservoir. Stale or partially written
//!     bytes are never served in place of fresh entropy.

use crate::{award::MAX_PICK_BYTES, error::AwardResult};
use rand::RngCore;
use std::fmt;

/// How many worst-case picks one refill covers.
pub const PICKS_PER_REFILL: usize = 8;

/// Buffer length, derived from the evaluator's byte cost per pick.
pub const RESERVOIR_LEN: usize = MAX_PICK_BYTES * PICKS_PER_REFILL;

pub struct Reservoir<R> {
    source:    R,
    buf:       [u8; RESERVOIR_LEN],
    remaining: usize,
    refills:   u64,
}

impl<R: RngCore> Reservoir<R> {
    /// Create an empty reservoir. The first draw (or an explicit
    /// `refill()`) pulls from the source.
    pub fn new(source: R) -> Self {
        Self {
            source,
            buf:       [0; RESERVOIR_LEN],
            remaining: 0,
            refills:   0,
        }
    }

    pub fn remaining(&self) -> usize { self.remaining }

    /// Number of successful refills since construction.
    pub fn refills(&self) -> u64 { self.refills }

    /// Overwrite the whole buffer from the source.
    pub fn refill(&mut self) -> AwardResult<()> {
        if let Err(err) = self.source.try_fill_bytes(&mut self.buf) {
            self.remaining = 0;
            log::warn!("reservoir refill failed: {err}");
            return Err(err.into());
        }
        self.remaining = RESERVOIR_LEN;
        self.refills += 1;
        log::debug!("reservoir refill #{}: {RESERVOIR_LEN} bytes", self.refills);
        Ok(())
    }

    /// Take N never-served bytes, refilling first if needed.
    pub fn draw<const N: usize>(&mut self) -> AwardResult<[u8; N]> {
        const { assert!(N <= RESERVOIR_LEN, "draw exceeds reservoir length") };

        if self.remaining <= N {
            self.refill()?;
        }
        let start = RESERVOIR_LEN - self.remaining;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.buf[start..start + N]);
        self.remaining -= N;
        Ok(out)
    }
}

impl<R> fmt::Debug for Reservoir<R> {
    // Never print buffer contents.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reservoir")
            .field("len", &RESERVOIR_LEN)
            .field("remaining", &self.remaining)
            .field("refills", &self.refills)
            .finish()
    }
}
