//! Hasher contract (spec.md §6): `create(algo)`, `update`, `get_hash`.
//!
//! A thin enum dispatch over the RustCrypto digest crates already in the
//! teacher's dependency stack, generalized from one free function per
//! algorithm (`pqcrypto_native::utils::hashing::sha384`) into a runtime
//! selector, since the MGF1/challenge hash algorithm is chosen by
//! `ParameterSet::strength` rather than hardcoded per call site.

use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

/// Which digest algorithm a [`Hasher`] instance runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Output length in bytes, used to size MGF1 seeds (spec.md §4.H:
    /// "Seed length equals that hash's output length").
    pub fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha512 => 64,
        }
    }
}

enum Inner {
    Sha1(Sha1),
    Sha256(Sha256),
    Sha512(Sha512),
}

/// A running hash state, created for one algorithm and fed bytes via
/// [`Hasher::update`] until [`Hasher::finalize`] consumes it.
pub struct Hasher {
    inner: Inner,
}

impl Hasher {
    pub fn create(algo: HashAlgorithm) -> Self {
        let inner = match algo {
            HashAlgorithm::Sha1 => Inner::Sha1(Sha1::new()),
            HashAlgorithm::Sha256 => Inner::Sha256(Sha256::new()),
            HashAlgorithm::Sha512 => Inner::Sha512(Sha512::new()),
        };
        Hasher { inner }
    }

    pub fn update(&mut self, data: &[u8]) {
        match &mut self.inner {
            Inner::Sha1(h) => h.update(data),
            Inner::Sha256(h) => h.update(data),
            Inner::Sha512(h) => h.update(data),
        }
    }

    pub fn finalize(self) -> Vec<u8> {
        match self.inner {
            Inner::Sha1(h) => h.finalize().to_vec(),
            Inner::Sha256(h) => h.finalize().to_vec(),
            Inner::Sha512(h) => h.finalize().to_vec(),
        }
    }

    /// One-shot convenience: hash `input` in full with a fresh state of
    /// the given algorithm.
    pub fn get_hash(algo: HashAlgorithm, input: &[u8]) -> Vec<u8> {
        let mut hasher = Hasher::create(algo);
        hasher.update(input);
        hasher.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_lengths_match_algorithm() {
        assert_eq!(Hasher::get_hash(HashAlgorithm::Sha1, b"").len(), 20);
        assert_eq!(Hasher::get_hash(HashAlgorithm::Sha256, b"").len(), 32);
        assert_eq!(Hasher::get_hash(HashAlgorithm::Sha512, b"").len(), 64);
    }

    #[test]
    fn incremental_update_matches_one_shot() {
        let mut incremental = Hasher::create(HashAlgorithm::Sha256);
        incremental.update(b"hello ");
        incremental.update(b"world");
        let one_shot = Hasher::get_hash(HashAlgorithm::Sha256, b"hello world");
        assert_eq!(incremental.finalize(), one_shot);
    }
}
