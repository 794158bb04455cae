//! Fake entropy sources and recording helpers shared by integration tests.
#![allow(dead_code)]

use award_core::{AwardConfig, Outcome};
use rand::RngCore;
use std::sync::{Arc, Mutex};

/// Fills every byte of refill k with `k as u8` (starting at 1), so each
/// served byte identifies the refill it came from. Optionally fails on
/// one specific fill.
pub struct CountingSource {
    pub fills: u32,
    fail_on:   Option<u32>,
}

impl CountingSource {
    pub fn new() -> Self {
        Self { fills: 0, fail_on: None }
    }

    /// Fail only the `n`th fill (1-based); later fills succeed again.
    pub fn failing_on(n: u32) -> Self {
        Self { fills: 0, fail_on: Some(n) }
    }
}

impl RngCore for CountingSource {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill_bytes(&mut bytes);
        u64::from_le_bytes(bytes)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.try_fill_bytes(dest).expect("counting source fill");
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fills += 1;
        if self.fail_on == Some(self.fills) {
            return Err(rand::Error::new("entropy unavailable"));
        }
        dest.fill(self.fills as u8);
        Ok(())
    }
}

/// Replays a fixed byte script, cycling continuously across fills.
pub struct ScriptedSource {
    script: Vec<u8>,
    pos:    usize,
}

impl ScriptedSource {
    pub fn new(script: &[u8]) -> Self {
        assert!(!script.is_empty(), "script must not be empty");
        Self { script: script.to_vec(), pos: 0 }
    }
}

impl RngCore for ScriptedSource {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill_bytes(&mut bytes);
        u64::from_le_bytes(bytes)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.script[self.pos];
            self.pos = (self.pos + 1) % self.script.len();
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

pub type OutcomeLog = Arc<Mutex<Vec<Outcome>>>;

/// A config whose every slot appends its outcome to the returned log.
pub fn recording_config() -> (AwardConfig, OutcomeLog) {
    let log: OutcomeLog = Arc::default();
    let mut config = AwardConfig::new();
    for outcome in Outcome::ALL {
        let log = Arc::clone(&log);
        config = config.on(outcome, move || log.lock().unwrap().push(outcome));
    }
    (config, log)
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
