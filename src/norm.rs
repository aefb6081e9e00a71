//! Norm Evaluator (component F): Nₖ(S).
//!
//! `Nₖ(S)` upper-bounds `‖Sc‖²` over every κ-sparse ternary challenge `c`,
//! and is both the key-generation acceptance test and the floor on
//! signing's rejection probability. Ported from `bliss_private_key.c`'s
//! `nks_norm()`, which rotates the self/cross-correlation vector `t` by
//! every shift, sums the top-κ entries of each rotation, then sums the
//! top-κ of *those* sums.

use crate::arith::{rotate, wrapped_product};

/// Computes Nₖ(s1, s2) for secret vectors `s1`, `s2` of equal length and
/// challenge weight `kappa`.
pub fn nk_norm(s1: &[i32], s2: &[i32], kappa: usize) -> u64 {
    let n = s1.len();
    debug_assert_eq!(n, s2.len());
    debug_assert!(kappa <= n);

    // t[i] = <s1, rho^i s1> + <s2, rho^i s2>
    let mut t = vec![0i64; n];
    for i in 0..n {
        t[i] = wrapped_product(s1, s1, i) + wrapped_product(s2, s2, i);
    }

    let mut max_kappa = vec![0i64; n];
    for i in 0..n {
        let mut rotated = rotate(&t, i);
        rotated.sort_unstable();
        max_kappa[i] = rotated[n - kappa..].iter().sum();
    }

    max_kappa.sort_unstable();
    let total: i64 = max_kappa[n - kappa..].iter().sum();
    total.max(0) as u64
}

/// `round_and_drop(u) -> ud`: drops the low `d` bits of each `u[i]` with
/// unbiased (ties-to-nearest) rounding, then reduces mod `p`.
///
/// `ud[i] = ((u[i] + 2^(d-1)) >> d) mod p`. Inputs must already be
/// normalized to `[0, 2q)` (spec.md §4.I).
pub fn round_and_drop(u: &[i32], d: u32, p: u32) -> Vec<i16> {
    let bias = 1i32 << (d - 1);
    u.iter()
        .map(|&v| {
            let rounded = (v + bias) >> d;
            rounded.rem_euclid(p as i32) as i16
        })
        .collect()
}

/// `check_norms(set, z1, z2d)`: enforces the ℓ∞ and combined ℓ₂ bounds
/// from the parameter set (spec.md §4.I, invariant 6). `z2d` is scaled by
/// `2^d` before the ℓ∞ comparison, matching how the original compares
/// dropped-bit coefficients against the same bound as the undropped `z1`.
/// `b_l2` is the linear B₂ bound, so the ℓ₂² sum is compared against
/// `b_l2²`, not `b_l2` itself.
pub fn check_norms(z1: &[i32], z2d: &[i16], d: u32, b_inf: i64, b_l2: u64) -> bool {
    let z1_inf = z1.iter().map(|&v| (v as i64).abs()).max().unwrap_or(0);
    let z2d_inf = z2d
        .iter()
        .map(|&v| ((v as i64) << d).abs())
        .max()
        .unwrap_or(0);
    if z1_inf > b_inf || z2d_inf > b_inf {
        return false;
    }

    let z1_l2: u64 = z1.iter().map(|&v| (v as i64 * v as i64) as u64).sum();
    let z2d_l2: u64 = z2d
        .iter()
        .map(|&v| ((v as i64) << d).pow(2) as u64)
        .sum();
    z1_l2.saturating_add(z2d_l2) <= b_l2.saturating_mul(b_l2)
}
