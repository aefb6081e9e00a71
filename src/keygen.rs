//! Key-Gen Driver (component G): `generate(variant_id)`.
//!
//! Ported from `bliss_private_key.c`'s `create_secret()` +
//! `bliss_private_key_gen()`: repeatedly sample a candidate `(f, g)` pair
//! from fresh RNG seeds, reject it on an Nₖ(S) bound failure, then test
//! `f`'s invertibility in the NTT domain before deriving the public
//! polynomial `a = (2g+1)·f⁻¹ mod q`.

use tracing::debug;

use crate::arith::invert;
use crate::error::BlissError;
use crate::key::PrivateKey;
use crate::norm::nk_norm;
use crate::ntt::NttEngine;
use crate::params::ParameterSet;
use crate::rng::RandomSource;
use crate::sampler::create_vector_from_seed;

/// Spec.md §4.G: `SECRET_KEY_TRIALS_MAX`.
const SECRET_KEY_TRIALS_MAX: u32 = 50;

/// Samples a candidate `(f, 2g+1)` pair and tests it against the Nₖ(S)
/// bound, retrying up to `SECRET_KEY_TRIALS_MAX` times.
fn create_secret(
    set: &'static ParameterSet,
    rng: &mut dyn RandomSource,
    trials: &mut u32,
) -> Result<(Vec<i8>, Vec<i8>), BlissError> {
    let algo = set.mgf_hash();

    while *trials < SECRET_KEY_TRIALS_MAX {
        *trials += 1;

        let seed = rng.get_bytes(algo.output_len())?;
        let f = create_vector_from_seed(&seed, algo, set.n, set.n_bits, set.delta1, set.delta2)?;

        let seed = rng.get_bytes(algo.output_len())?;
        let g = create_vector_from_seed(&seed, algo, set.n, set.n_bits, set.delta1, set.delta2)?;

        // s2 = 2g + 1
        let mut s2: Vec<i8> = g.iter().map(|&x| x * 2).collect();
        s2[0] += 1;

        let f32: Vec<i32> = f.iter().map(|&x| x as i32).collect();
        let s2_32: Vec<i32> = s2.iter().map(|&x| x as i32).collect();
        let nks = nk_norm(&f32, &s2_32, set.kappa);
        debug!(trial = *trials, nk = nks, nk_max = set.nk_max, "candidate secret sampled");

        if nks < set.nk_max {
            return Ok((f, s2));
        }
    }

    Err(BlissError::KeyGenExhausted)
}

/// `generate(variant_id)`: produces a fresh `PrivateKey` for the given
/// BLISS variant, using `rng` for both the secret-vector seeds and (by
/// caller convention) `RNG_TRUE` strength.
pub fn generate(
    set: &'static ParameterSet,
    rng: &mut dyn RandomSource,
) -> Result<PrivateKey, BlissError> {
    let n = set.n;
    let q = set.q;
    let ntt = NttEngine::new(&set.fft)?;

    let mut trials = 0u32;
    loop {
        let (f, s2) = create_secret(set, rng, &mut trials)?;

        // Lift to unsigned residues. Note the asymmetric sign convention
        // on S2 (spec.md §9 / DESIGN.md): this computes a = -(2g+1)·f⁻¹,
        // matching the verifier's interop expectation rather than the
        // naively "symmetric" lift.
        let s1_unsigned: Vec<u32> = f
            .iter()
            .map(|&x| if x < 0 { (x as i32 + q as i32) as u32 } else { x as u32 })
            .collect();
        let s2_unsigned: Vec<u32> = s2
            .iter()
            .map(|&x| if x > 0 { q - x as u32 } else { (-(x as i32)) as u32 })
            .collect();

        let s1_freq = ntt.transform(&s1_unsigned, false);
        if s1_freq.iter().any(|&v| v == 0) {
            debug!(trial = trials, "s1 not invertible, retrying");
            if trials >= SECRET_KEY_TRIALS_MAX {
                return Err(BlissError::KeyGenExhausted);
            }
            continue;
        }
        let s2_freq = ntt.transform(&s2_unsigned, false);

        let a_freq: Vec<u32> = s1_freq
            .iter()
            .zip(s2_freq.iter())
            .map(|(&s1v, &s2v)| {
                let inv = invert(s1v, q);
                ((s2v as u64 * inv as u64) % q as u64) as u32
            })
            .collect();
        let a = ntt.transform(&a_freq, true);

        debug_assert_eq!(a.len(), n);
        debug!(trial = trials, "key generation succeeded");
        return Ok(PrivateKey::new(set, f, s2, a));
    }
}
