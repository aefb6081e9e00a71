//! Modular/Polynomial Arithmetic (component B), time-domain half.
//!
//! The FFT/NTT half of this component lives in [`crate::ntt`]; this module
//! covers the modular inverse and the negative-wrapped convolution and
//! rotation used directly on coefficient vectors (e.g. by the norm
//! evaluator and `multiply_by_c`).

/// Computes `x^(q-2) mod q`, i.e. the modular inverse of `x` via Fermat's
/// little theorem, by square-and-multiply scanning the bits of `q - 2`
/// from least to most significant.
///
/// Precondition: `0 < x < q`. Undefined (returns 0) if `x == 0` — callers
/// must check invertibility (e.g. via the NTT image) before calling this
/// on untrusted input.
pub fn invert(x: u32, q: u32) -> u32 {
    if x == 0 {
        return 0;
    }
    let q64 = q as u64;
    let mut exponent = (q - 2) as u64;
    let mut base = x as u64 % q64;
    let mut result: u64 = 1;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = (result * base) % q64;
        }
        base = (base * base) % q64;
        exponent >>= 1;
    }
    result as u32
}

/// Computes the `s`-th time-domain coefficient of the negative-wrapped
/// convolution of `x` and `y`:
///
/// `Σ_{i=0}^{n-s-1} x[i]·y[i+s] − Σ_{i=n-s}^{n-1} x[i]·y[i+s-n]`
///
/// No modular reduction is applied; callers are responsible for keeping
/// input magnitudes inside the accumulator's range (spec.md §4.B).
pub fn wrapped_product(x: &[i32], y: &[i32], s: usize) -> i64 {
    let n = x.len();
    debug_assert_eq!(n, y.len());
    debug_assert!(s < n);
    let mut sum: i64 = 0;
    for i in 0..n - s {
        sum += x[i] as i64 * y[i + s] as i64;
    }
    for i in n - s..n {
        sum -= x[i] as i64 * y[i + s - n] as i64;
    }
    sum
}

/// Negative-wrapped rotation of `t` by shift `s`, written into a
/// freshly-allocated vector `t'` of the same length:
///
/// `t'[i+s] = t[i]` for `i < n-s`; `t'[i+s-n] = -t[i]` for `i >= n-s`.
pub fn rotate(t: &[i64], s: usize) -> Vec<i64> {
    let n = t.len();
    debug_assert!(s < n);
    let mut out = vec![0i64; n];
    for i in 0..n - s {
        out[i + s] = t[i];
    }
    for i in n - s..n {
        out[i + s - n] = -t[i];
    }
    out
}
