//! Private-key core of a BLISS (Bimodal Lattice Signature Scheme)
//! lattice-based digital signature scheme, variants I/III/IV.
//!
//! This crate implements key generation and signature generation only:
//! ASN.1/PEM framing for external credential-registry plumbing,
//! verification, and parameter-set derivation are either implemented as
//! thin, scope-limited facades ([`encoding`], [`fingerprint`]) or left
//! out entirely (verification, per spec). See `DESIGN.md` for the
//! grounding of every module against its source material.

pub mod arith;
pub mod bitspender;
pub mod encoding;
pub mod error;
pub mod fingerprint;
pub mod hasher;
pub mod key;
pub mod keygen;
pub mod norm;
pub mod ntt;
pub mod params;
pub mod rng;
pub mod sampler;
pub mod sign;
pub mod signature;

pub use error::{BlissError, Result};
pub use key::{PrivateKey, PublicKey};
pub use params::{ParameterSet, Variant};
pub use sign::{SignatureScheme, SigningDriver};
pub use signature::Signature;

use rng::RandomSource;

/// The only signature scheme identifier this core accepts from callers,
/// matching spec.md §6's `SIGN_BLISS_WITH_SHA512`.
pub const SIGN_BLISS_WITH_SHA512: &str = "SIGN_BLISS_WITH_SHA512";

/// `generate(variant_id) -> PrivateKey | error`, drawing secret-vector
/// seeds from the OS entropy source (`RNG_TRUE`, spec.md §6).
pub fn generate(variant_id: u8) -> Result<PrivateKey> {
    let set = params::by_variant_id(variant_id)?;
    let mut rng = rng::OsRandomSource::default();
    keygen::generate(set, &mut rng)
}

/// Same as [`generate`] but with an explicit `RandomSource`, for
/// reproducible test runs (spec.md §8 scenario S1).
pub fn generate_with_rng(variant_id: u8, rng: &mut dyn RandomSource) -> Result<PrivateKey> {
    let set = params::by_variant_id(variant_id)?;
    keygen::generate(set, rng)
}

/// `load(encoded_private_key) -> PrivateKey | error`: parses a DER-encoded
/// private key (spec.md §6).
pub fn load(encoded_private_key: &[u8]) -> Result<PrivateKey> {
    encoding::decode_der(encoded_private_key)
}

/// `sign(key, scheme, message) -> signature_bytes | error`. `scheme` must
/// equal [`SIGN_BLISS_WITH_SHA512`]; any other value is
/// `BlissError::UnsupportedScheme`.
pub fn sign(key: &PrivateKey, scheme: &str, message: &[u8]) -> Result<Vec<u8>> {
    if scheme != SIGN_BLISS_WITH_SHA512 {
        return Err(BlissError::UnsupportedScheme);
    }
    let driver = SigningDriver::new();
    let signature = driver.sign(key, SignatureScheme::BlissWithSha512, message)?;
    Ok(signature.to_bytes())
}

/// `get_public_key(key) -> PublicKey`.
pub fn get_public_key(key: &PrivateKey) -> PublicKey {
    key.public_key()
}

/// `get_keysize(key) -> strength_bits`.
pub fn get_keysize(key: &PrivateKey) -> u32 {
    key.keysize_bits()
}

/// `destroy(key)`: dropping a `PrivateKey` zeroizes its secret material
/// deterministically (spec.md §11.6) — there is no separate entry point
/// to call.
pub fn destroy(key: PrivateKey) {
    drop(key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rng::SeededRandomSource;

    #[test]
    fn generate_twice_with_same_rng_trace_matches() {
        let mut rng_a = SeededRandomSource::from_seed([1u8; 32]);
        let mut rng_b = SeededRandomSource::from_seed([1u8; 32]);
        let key_a = generate_with_rng(1, &mut rng_a).unwrap();
        let key_b = generate_with_rng(1, &mut rng_b).unwrap();
        assert_eq!(key_a.s1(), key_b.s1());
        assert_eq!(key_a.s2(), key_b.s2());
        assert_eq!(key_a.a(), key_b.a());
    }

    #[test]
    fn sign_rejects_unsupported_scheme() {
        let mut rng = SeededRandomSource::from_seed([6u8; 32]);
        let key = generate_with_rng(1, &mut rng).unwrap();
        let result = sign(&key, "SIGN_RSA_EMSA_PKCS1_SHA2_256", b"hello");
        assert_eq!(result.unwrap_err(), BlissError::UnsupportedScheme);
    }

    #[test]
    fn sign_empty_message_meets_bliss_i_bounds() {
        let mut rng = SeededRandomSource::from_seed([8u8; 32]);
        let key = generate_with_rng(1, &mut rng).unwrap();

        let driver = SigningDriver::new();
        let mut sign_rng = SeededRandomSource::from_seed([8u8; 32]);
        let signature = driver
            .sign_deterministic(&key, SignatureScheme::BlissWithSha512, b"", &mut sign_rng)
            .unwrap();

        assert!(signature.z1.iter().all(|&v| (v as i64).abs() <= key.set.b_inf));
        assert_eq!(signature.c_indices.len(), key.set.kappa);
        let mut sorted = signature.c_indices.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), signature.c_indices.len());
    }

    #[test]
    fn unknown_variant_is_configuration_error() {
        assert_eq!(
            generate(99).unwrap_err(),
            BlissError::ConfigurationError("unknown BLISS variant id")
        );
    }

    #[test]
    fn encode_decode_round_trip_preserves_signing_behavior() {
        let mut rng = SeededRandomSource::from_seed([13u8; 32]);
        let key = generate_with_rng(1, &mut rng).unwrap();
        let der = encoding::encode_der(&key).unwrap();
        let loaded = load(&der).unwrap();
        assert!(key.secret_material_eq(&loaded));

        let driver = SigningDriver::new();
        let mut rng_a = SeededRandomSource::from_seed([21u8; 32]);
        let mut rng_b = SeededRandomSource::from_seed([21u8; 32]);
        let sig_a = driver
            .sign_deterministic(&key, SignatureScheme::BlissWithSha512, b"message", &mut rng_a)
            .unwrap();
        let sig_b = driver
            .sign_deterministic(&loaded, SignatureScheme::BlissWithSha512, b"message", &mut rng_b)
            .unwrap();
        assert_eq!(sig_a, sig_b);
    }
}
