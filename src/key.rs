//! `PrivateKey` and `PublicKey` entities (spec.md §3 Data Model).
//!
//! `PrivateKey` is immutable after construction; signing takes it by
//! shared reference only (spec.md §5: "signing never mutates it").
//! Destruction zeroizes `s1`/`s2` — the secret material — before the
//! backing allocation is freed; `a` and the parameter-set reference are
//! not secret and are simply dropped (spec.md §11.6 / DESIGN.md).

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::params::ParameterSet;

/// Owns the secret ternary polynomial `s1` (= `f`), the secret
/// `s2` (= `2g + 1`), and the derived public polynomial `a`.
pub struct PrivateKey {
    pub set: &'static ParameterSet,
    s1: Vec<i8>,
    s2: Vec<i8>,
    a: Vec<u32>,
}

impl PrivateKey {
    pub(crate) fn new(set: &'static ParameterSet, s1: Vec<i8>, s2: Vec<i8>, a: Vec<u32>) -> Self {
        debug_assert_eq!(s1.len(), set.n);
        debug_assert_eq!(s2.len(), set.n);
        debug_assert_eq!(a.len(), set.n);
        PrivateKey { set, s1, s2, a }
    }

    pub fn s1(&self) -> &[i8] {
        &self.s1
    }

    pub fn s2(&self) -> &[i8] {
        &self.s2
    }

    pub fn a(&self) -> &[u32] {
        &self.a
    }

    /// `get_keysize`: the parameter set's declared security strength.
    pub fn keysize_bits(&self) -> u32 {
        self.set.strength
    }

    /// Compares `s1`/`s2` against another key's in constant time — used
    /// by round-trip tests (spec.md §8 property 6) instead of a plain
    /// `==`, since these bytes are secret material (spec.md §5).
    pub fn secret_material_eq(&self, other: &PrivateKey) -> bool {
        let s1_eq: bool = self.s1.ct_eq(&other.s1).into();
        let s2_eq: bool = self.s2.ct_eq(&other.s2).into();
        s1_eq && s2_eq
    }

    /// `get_public_key`: hands `(oid, a, n)` to the caller. No
    /// verification logic is attached — verification is out of scope
    /// (spec.md §1, §11.3).
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            oid: self.set.oid,
            a: self.a.clone(),
            n: self.set.n,
        }
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.s1.zeroize();
        self.s2.zeroize();
    }
}

/// A minimal, non-secret data carrier for the public key: `(oid, a, n)`.
/// Verification is specified elsewhere and is not implemented here.
#[derive(Debug, Clone)]
pub struct PublicKey {
    pub oid: &'static str,
    pub a: Vec<u32>,
    pub n: usize,
}
