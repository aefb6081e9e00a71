//! RNG contract (spec.md §6): two strengths, `RNG_TRUE` for key
//! generation and `RNG_STRONG` for per-signature sampler seeds, both
//! exposing `get_bytes(n) -> n bytes | error`.
//!
//! Grounded on `axelarnetwork-tofn`'s seed-derived deterministic RNG
//! pattern (`rng_seed_signing_key`): production code draws from the OS
//! entropy source, while a `ChaCha20`-backed implementation gives tests a
//! reproducible byte stream — needed for scenario S1 ("`generate` twice
//! with a seeded RNG reproduces the same key byte-for-byte").

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::BlissError;

/// A source of random bytes. Implementors correspond to spec.md's
/// `RNG_TRUE`/`RNG_STRONG` strengths; the core treats both the same way
/// at the type level and differs only in which instance it is handed.
pub trait RandomSource {
    fn get_bytes(&mut self, n: usize) -> Result<Vec<u8>, BlissError>;
}

/// The OS entropy source, used by default for both `RNG_TRUE` and
/// `RNG_STRONG`.
#[derive(Default)]
pub struct OsRandomSource {
    inner: rand::rngs::OsRng,
}

impl RandomSource for OsRandomSource {
    fn get_bytes(&mut self, n: usize) -> Result<Vec<u8>, BlissError> {
        let mut buf = vec![0u8; n];
        self.inner
            .try_fill_bytes(&mut buf)
            .map_err(|_| BlissError::EntropyError("OS entropy source failed"))?;
        Ok(buf)
    }
}

/// A deterministic, seedable random source for reproducible test runs.
/// Not used by default in production code paths.
pub struct SeededRandomSource {
    inner: ChaCha20Rng,
}

impl SeededRandomSource {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        SeededRandomSource {
            inner: ChaCha20Rng::from_seed(seed),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn get_bytes(&mut self, n: usize) -> Result<Vec<u8>, BlissError> {
        let mut buf = vec![0u8; n];
        self.inner.fill_bytes(&mut buf);
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_source_is_deterministic() {
        let mut a = SeededRandomSource::from_seed([7u8; 32]);
        let mut b = SeededRandomSource::from_seed([7u8; 32]);
        assert_eq!(a.get_bytes(64).unwrap(), b.get_bytes(64).unwrap());
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeededRandomSource::from_seed([1u8; 32]);
        let mut b = SeededRandomSource::from_seed([2u8; 32]);
        assert_ne!(a.get_bytes(64).unwrap(), b.get_bytes(64).unwrap());
    }
}
