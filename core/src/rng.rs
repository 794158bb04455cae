//! Randomness sources for the reservoir.
//!
//! RULE: Production awards draw from the operating system's secure
//! source (`OsRng`). `SeededSource` exists for reproducible simulation
//! runs and tests only. It is NOT cryptographically secure and must
//! never back a live award.
//!
//! Each seeded stream is derived from (master_seed XOR stream_index * φ),
//! so several awards in one simulation run get independent streams that
//! are still fully reproducible from the single master seed.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// The production source: the OS CSPRNG.
pub type SecureSource = rand::rngs::OsRng;

/// A named, deterministic byte source.
pub struct SeededSource {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl SeededSource {
    pub fn new(master_seed: u64) -> Self {
        Self::for_stream(master_seed, 0)
    }

    /// Derive an independent stream from the master seed. The stream
    /// index must never change once assigned to a consumer.
    pub fn for_stream(master_seed: u64, stream_index: u64) -> Self {
        let derived_seed = master_seed ^ (stream_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl RngCore for SeededSource {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SeededSource::new(12345);
        let mut b = SeededSource::new(12345);
        let (mut buf_a, mut buf_b) = ([0u8; 64], [0u8; 64]);
        a.fill_bytes(&mut buf_a);
        b.fill_bytes(&mut buf_b);
        assert_eq!(buf_a, buf_b, "Same seed should produce same bytes");
    }

    #[test]
    fn streams_are_independent() {
        let mut a = SeededSource::for_stream(12345, 0);
        let mut b = SeededSource::for_stream(12345, 1);
        assert_ne!(a.next_u64(), b.next_u64(),
            "Different stream indices should diverge");
    }
}
