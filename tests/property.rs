//! Property tests for spec.md §8 invariants 1/3/4/5, gated behind the
//! `property-tests` feature (teacher's optional `quickcheck` dependency).
//!
//! Run with `cargo test --features property-tests`.

#![cfg(feature = "property-tests")]

use quickcheck::QuickCheck;

use bliss_core::generate_with_rng;
use bliss_core::ntt::NttEngine;
use bliss_core::params;
use bliss_core::rng::SeededRandomSource;
use bliss_core::{SignatureScheme, SigningDriver};

fn seed_from_u64(v: u64) -> [u8; 32] {
    let mut seed = [0u8; 32];
    seed[..8].copy_from_slice(&v.to_le_bytes());
    seed
}

/// Invariant 1: secret sparsity.
fn prop_secret_sparsity(seed_val: u64) -> bool {
    let set = params::by_variant_id(1).unwrap();
    let mut rng = SeededRandomSource::from_seed(seed_from_u64(seed_val));
    let key = generate_with_rng(1, &mut rng).unwrap();

    let ones = key.s1().iter().filter(|&&x| x.abs() == 1).count();
    let twos = key.s1().iter().filter(|&&x| x.abs() == 2).count();
    let s2_zero_adjustment = (key.s2()[0] as i32 - 1).abs();

    ones == set.delta1 && twos == set.delta2 && s2_zero_adjustment % 2 == 0
}

/// Invariant 4: invertibility — generation never returns a key whose
/// `s1` has a zero NTT coefficient.
fn prop_invertibility(seed_val: u64) -> bool {
    let set = params::by_variant_id(1).unwrap();
    let mut rng = SeededRandomSource::from_seed(seed_from_u64(seed_val));
    let key = generate_with_rng(1, &mut rng).unwrap();

    let ntt = NttEngine::new(&set.fft).unwrap();
    let s1_unsigned: Vec<u32> = key
        .s1()
        .iter()
        .map(|&x| if x < 0 { (x as i32 + set.q as i32) as u32 } else { x as u32 })
        .collect();
    ntt.transform(&s1_unsigned, false).iter().all(|&v| v != 0)
}

/// Invariant 5: every signature satisfies `check_norms`.
fn prop_signature_norms(seed_val: u64) -> bool {
    use bliss_core::norm::check_norms;

    let set = params::by_variant_id(1).unwrap();
    let mut keygen_rng = SeededRandomSource::from_seed(seed_from_u64(seed_val));
    let key = generate_with_rng(1, &mut keygen_rng).unwrap();

    let driver = SigningDriver::new();
    let mut sign_rng = SeededRandomSource::from_seed(seed_from_u64(seed_val.wrapping_add(1)));
    let signature = driver
        .sign_deterministic(&key, SignatureScheme::BlissWithSha512, b"property test message", &mut sign_rng)
        .unwrap();

    check_norms(&signature.z1, &signature.z2d, set.d, set.b_inf, set.b_l2)
}

#[test]
fn secret_sparsity_holds_across_many_seeds() {
    QuickCheck::new()
        .tests(20)
        .quickcheck(prop_secret_sparsity as fn(u64) -> bool);
}

#[test]
fn generated_secrets_are_always_invertible() {
    QuickCheck::new()
        .tests(20)
        .quickcheck(prop_invertibility as fn(u64) -> bool);
}

#[test]
fn signatures_always_satisfy_norm_bounds() {
    QuickCheck::new()
        .tests(10)
        .quickcheck(prop_signature_norms as fn(u64) -> bool);
}
