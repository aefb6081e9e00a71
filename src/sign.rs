//! Signing Driver (component H): the BLISS rejection-sampling loop.
//!
//! Ported from `bliss_private_key.c`'s `sign_bliss_with_sha512()` and its
//! `multiply_by_c()` helper. Only `SIGN_BLISS_WITH_SHA512` is a supported
//! scheme (spec.md §6); any other value is rejected before the loop
//! starts.

use tracing::{debug, trace};

use crate::error::BlissError;
use crate::hasher::{HashAlgorithm, Hasher};
use crate::key::PrivateKey;
use crate::norm::{check_norms, round_and_drop};
use crate::ntt::NttEngine;
use crate::rng::RandomSource;
use crate::sampler::GaussianSampler;
use crate::signature::{generate_c, Signature};

/// The only signature scheme this core supports (spec.md §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureScheme {
    BlissWithSha512,
}

/// Multiplies secret vector `s` by the κ-sparse `{0,1}` challenge with
/// support `c_indices`: `product[i] = Σ_j ±s[(i - c_indices[j]) mod n]`,
/// with the sign flipped whenever the subtraction wraps past zero —
/// negative-wrapped convolution against a sparse multiplier. Ported
/// directly from `multiply_by_c()`.
fn multiply_by_c(s: &[i8], c_indices: &[u16], n: usize) -> Vec<i32> {
    let mut product = vec![0i32; n];
    for i in 0..n {
        let mut acc: i32 = 0;
        for &idx in c_indices {
            let index = idx as i32;
            let shifted = i as i32 - index;
            if shifted < 0 {
                acc -= s[(shifted + n as i32) as usize] as i32;
            } else {
                acc += s[shifted as usize] as i32;
            }
        }
        product[i] = acc;
    }
    product
}

fn dot(x: &[i32], y: &[i32]) -> i64 {
    x.iter().zip(y.iter()).map(|(&a, &b)| a as i64 * b as i64).sum()
}

/// Runs the signing driver for one `PrivateKey`, with an optional
/// defensive retry cap (spec.md §9's Open Question; default unbounded).
pub struct SigningDriver {
    retry_cap: Option<u32>,
}

impl Default for SigningDriver {
    fn default() -> Self {
        SigningDriver { retry_cap: None }
    }
}

impl SigningDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opt into a bounded worst case. Exceeding `cap` rejection
    /// iterations returns `SigningExhausted` rather than spinning
    /// forever; the default (no call to this) never imposes a cap.
    pub fn with_retry_cap(mut self, cap: u32) -> Self {
        self.retry_cap = Some(cap);
        self
    }

    /// `sign(key, scheme, message)`: the full 13-step rejection loop from
    /// spec.md §4.H, drawing sampler seeds from the OS entropy source.
    pub fn sign(
        &self,
        key: &PrivateKey,
        scheme: SignatureScheme,
        message: &[u8],
    ) -> Result<Signature, BlissError> {
        let mut rng = crate::rng::OsRandomSource::default();
        self.sign_deterministic(key, scheme, message, &mut rng)
    }

    /// Same as [`Self::sign`] but with an explicit `RandomSource`, for
    /// deterministic test runs (spec.md §8 property 8).
    pub fn sign_deterministic(
        &self,
        key: &PrivateKey,
        scheme: SignatureScheme,
        message: &[u8],
        rng: &mut dyn RandomSource,
    ) -> Result<Signature, BlissError> {
        if scheme != SignatureScheme::BlissWithSha512 {
            return Err(BlissError::UnsupportedScheme);
        }

        let set = key.set;
        let n = set.n;
        let q = set.q;
        let q2 = 2 * q;
        let p = set.p;
        let p2 = (p / 2) as i32;
        let d = set.d;

        let data_hash = Hasher::get_hash(HashAlgorithm::Sha512, message);
        let mgf_algo = set.mgf_hash();
        let seed_len = mgf_algo.output_len();

        let ntt = NttEngine::new(&set.fft)?;
        let a_freq = ntt.transform(key.a(), false);

        let mut iterations: u32 = 0;

        loop {
            iterations += 1;
            if let Some(cap) = self.retry_cap {
                if iterations > cap {
                    return Err(BlissError::SigningExhausted);
                }
            }

            let seed = rng.get_bytes(seed_len)?;
            let mut sampler = GaussianSampler::new(mgf_algo, &seed, set.sigma);

            let mut y1 = vec![0i32; n];
            let mut y2 = vec![0i32; n];
            let mut ay_unsigned = vec![0u32; n];
            for i in 0..n {
                let y1i = sampler.gaussian()?;
                let y2i = sampler.gaussian()?;
                y1[i] = y1i;
                y2[i] = y2i;
                ay_unsigned[i] = if y1i < 0 { (y1i + q as i32) as u32 } else { y1i as u32 };
            }

            let ay_freq = ntt.transform(&ay_unsigned, false);
            let ay_product: Vec<u32> = ay_freq
                .iter()
                .zip(a_freq.iter())
                .map(|(&ay, &a)| ((ay as u64 * a as u64) % q as u64) as u32)
                .collect();
            let ay = ntt.transform(&ay_product, true);

            let mut u = vec![0i32; n];
            for i in 0..n {
                let ui = 2 * set.q2_inv as i64 * ay[i] as i64 + y2[i] as i64;
                u[i] = ui.rem_euclid(q2 as i64) as i32;
            }
            let ud = round_and_drop(&u, d, p);

            let c_indices = generate_c(&data_hash, &ud, n, set.kappa)?;

            let s1c = multiply_by_c(key.s1(), &c_indices, n);
            let s2c = multiply_by_c(key.s2(), &c_indices, n);

            // Rejection A: accept with probability exp(-norm / 2sigma^2).
            let norm = dot(&s1c, &s1c) + dot(&s2c, &s2c);
            let arg = set.m as i64 - norm;
            trace!(iteration = iterations, norm, "rejection A norm computed");
            if !sampler.bernoulli_exp(arg)? {
                debug!(iteration = iterations, "rejection A: rejected");
                continue;
            }

            let positive = sampler.sign()?;
            let mut z1 = vec![0i32; n];
            let mut z2 = vec![0i32; n];
            for i in 0..n {
                if positive {
                    z1[i] = y1[i] + s1c[i];
                    z2[i] = y2[i] + s2c[i];
                } else {
                    z1[i] = y1[i] - s1c[i];
                    z2[i] = y2[i] - s2c[i];
                }
            }

            // Rejection B: accept with probability 1/cosh(scalar / sigma^2).
            let scalar = dot(&z1, &s1c) + dot(&z2, &s2c);
            if !sampler.bernoulli_cosh(scalar)? {
                debug!(iteration = iterations, "rejection B: rejected");
                continue;
            }

            let mut uz2 = vec![0i32; n];
            for i in 0..n {
                uz2[i] = (u[i] as i64 - z2[i] as i64).rem_euclid(q2 as i64) as i32;
            }
            let uz2d = round_and_drop(&uz2, d, p);

            let z2d: Vec<i16> = ud
                .iter()
                .zip(uz2d.iter())
                .map(|(&a, &b)| {
                    let mut value = a as i32 - b as i32;
                    if value <= -p2 {
                        value += p as i32;
                    } else if value > p2 {
                        value -= p as i32;
                    }
                    value as i16
                })
                .collect();

            if !check_norms(&z1, &z2d, d, set.b_inf, set.b_l2) {
                debug!(iteration = iterations, "norm check: rejected");
                continue;
            }

            debug!(iteration = iterations, "signature accepted");
            return Ok(Signature { z1, z2d, c_indices });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keygen;
    use crate::params;
    use crate::rng::SeededRandomSource;

    fn test_key() -> PrivateKey {
        let set = params::by_variant_id(1).unwrap();
        let mut rng = SeededRandomSource::from_seed([5u8; 32]);
        keygen::generate(set, &mut rng).unwrap()
    }

    #[test]
    fn supported_scheme_signs_successfully() {
        let key = test_key();
        let driver = SigningDriver::new();
        let mut rng = SeededRandomSource::from_seed([1u8; 32]);
        let result = driver.sign_deterministic(&key, SignatureScheme::BlissWithSha512, b"hello", &mut rng);
        assert!(result.is_ok());
    }

    #[test]
    fn signature_satisfies_norm_bounds() {
        let key = test_key();
        let driver = SigningDriver::new();
        let mut rng = SeededRandomSource::from_seed([2u8; 32]);
        let sig = driver
            .sign_deterministic(&key, SignatureScheme::BlissWithSha512, b"hello", &mut rng)
            .unwrap();
        assert!(check_norms(&sig.z1, &sig.z2d, key.set.d, key.set.b_inf, key.set.b_l2));
        assert_eq!(sig.c_indices.len(), key.set.kappa);
    }

    #[test]
    fn deterministic_given_identical_rng_trace() {
        let key = test_key();
        let driver = SigningDriver::new();
        let mut rng_a = SeededRandomSource::from_seed([42u8; 32]);
        let mut rng_b = SeededRandomSource::from_seed([42u8; 32]);
        let sig_a = driver
            .sign_deterministic(&key, SignatureScheme::BlissWithSha512, b"same message", &mut rng_a)
            .unwrap();
        let sig_b = driver
            .sign_deterministic(&key, SignatureScheme::BlissWithSha512, b"same message", &mut rng_b)
            .unwrap();
        assert_eq!(sig_a, sig_b);
    }

    #[test]
    fn retry_cap_bounds_the_loop() {
        let key = test_key();
        let driver = SigningDriver::new().with_retry_cap(0);
        let mut rng = SeededRandomSource::from_seed([2u8; 32]);
        let result = driver.sign_deterministic(&key, SignatureScheme::BlissWithSha512, b"hello", &mut rng);
        assert_eq!(result.unwrap_err(), BlissError::SigningExhausted);
    }
}
