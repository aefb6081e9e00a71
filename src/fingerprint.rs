//! Public-key fingerprinting (SPEC_FULL §11.4).
//!
//! The original's `get_fingerprint()` caches this value in a process-wide
//! credential-encoding cache; spec.md's Out-of-scope list names
//! "fingerprint caching" explicitly, so only the pure hash is implemented
//! here — no cache.

use sha2::{Digest, Sha256};

use crate::key::PublicKey;

/// SHA-256 over the same `(oid, public polynomial)` encoding the DER
/// private-key encoder uses for its public field, matching
/// `bliss_public_key_fingerprint()`'s input shape.
pub fn fingerprint(public: &PublicKey) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(public.oid.as_bytes());
    for &coeff in &public.a {
        hasher.update(&(coeff as u16).to_be_bytes());
    }
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_identical_input() {
        let public = PublicKey {
            oid: "1.3.6.1.4.1.8301.3.1.3.3.1",
            a: vec![1, 2, 3],
            n: 3,
        };
        assert_eq!(fingerprint(&public), fingerprint(&public));
    }

    #[test]
    fn differs_when_coefficients_differ() {
        let a = PublicKey {
            oid: "1.3.6.1.4.1.8301.3.1.3.3.1",
            a: vec![1, 2, 3],
            n: 3,
        };
        let b = PublicKey {
            oid: "1.3.6.1.4.1.8301.3.1.3.3.1",
            a: vec![1, 2, 4],
            n: 3,
        };
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }
}
