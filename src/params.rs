//! Parameter Set registry (component A).
//!
//! Immutable per-variant constants, looked up by numeric variant id or by
//! OID. Every set cross-validates its own `n`/`q` against its `fft`
//! sub-struct at registry-build time; a mismatch is a fatal
//! `ConfigurationError` rather than a silently-ignored inconsistency.
//!
//! The concrete numeric values below are representative constants for the
//! three enumerated BLISS variants, not the subject of this core (spec.md
//! §1 treats "parameter-set tables" as out-of-scope constant data); only
//! their shape and cross-validation are this module's concern.

use crate::error::BlissError;
use crate::ntt::FftParams;

/// Which of the three BLISS variants a `ParameterSet` describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    BlissI,
    BlissIii,
    BlissIv,
}

/// Immutable, per-variant constants shared by every `PrivateKey` and every
/// sampler instance created against that variant.
#[derive(Debug, Clone, Copy)]
pub struct ParameterSet {
    pub variant: Variant,
    pub variant_id: u8,
    /// Ring degree, a power of two.
    pub n: usize,
    /// `log2(n)`.
    pub n_bits: u32,
    /// Modulus, an odd prime.
    pub q: u32,
    /// Dropped-bit modulus, `p = floor(2q / 2^d)`.
    pub p: u32,
    /// Number of dropped bits.
    pub d: u32,
    /// Gaussian standard deviation.
    pub sigma: f64,
    /// Challenge Hamming weight.
    pub kappa: usize,
    /// Rejection constant (scaled to the same units as `nk_max`; resolved
    /// as `M = nk_max`, see DESIGN.md Open Question resolutions).
    pub m: u64,
    /// Count of secret-vector entries with magnitude 1.
    pub delta1: usize,
    /// Count of secret-vector entries with magnitude 2.
    pub delta2: usize,
    /// Upper bound on Nₖ(S) a generated secret must stay under. Must
    /// comfortably exceed `kappa * (‖s1‖² + ‖s2‖²)`, the dominant term of
    /// every `nk_norm` evaluation (norm.rs), or `create_secret` can never
    /// accept a candidate.
    pub nk_max: u64,
    /// Signature ℓ∞ bound.
    pub b_inf: i64,
    /// Signature combined ℓ₂ bound (B₂, not pre-squared); `check_norms`
    /// squares it before comparing against `‖z1‖₂² + ‖z2ᵈ‖₂²`.
    pub b_l2: u64,
    /// Modular inverse of 2 mod q (not mod 2q — see DESIGN.md / SPEC_FULL
    /// §12 for why the literal spec wording is resolved this way).
    pub q2_inv: u32,
    /// Security strength in bits; selects the MGF1/sampler hash
    /// (SHA-1 if `strength <= 160`, else SHA-256).
    pub strength: u32,
    /// Dotted-decimal OID identifying this variant in DER encodings.
    pub oid: &'static str,
    /// Parameters handed to the NTT engine; must agree on `n`/`q`.
    pub fft: FftParams,
}

impl ParameterSet {
    fn validate(&self) -> Result<(), BlissError> {
        if self.fft.n != self.n || self.fft.q != self.q {
            return Err(BlissError::ConfigurationError(
                "FFT parameters do not match BLISS parameters",
            ));
        }
        if !self.n.is_power_of_two() {
            return Err(BlissError::ConfigurationError("n is not a power of two"));
        }
        Ok(())
    }

    /// SHA-1 below 160-bit strength, SHA-256 otherwise — matches the MGF1
    /// hash selection spec.md §4.D and §4.H both specify.
    pub fn mgf_hash(&self) -> crate::hasher::HashAlgorithm {
        if self.strength <= 160 {
            crate::hasher::HashAlgorithm::Sha1
        } else {
            crate::hasher::HashAlgorithm::Sha256
        }
    }
}

const BLISS_I: ParameterSet = ParameterSet {
    variant: Variant::BlissI,
    variant_id: 1,
    n: 512,
    n_bits: 9,
    q: 12_289,
    p: 24,
    d: 10,
    sigma: 215.73,
    kappa: 23,
    m: 46_000,
    delta1: 154,
    delta2: 0,
    nk_max: 46_000,
    b_inf: 2047,
    b_l2: 12_872,
    q2_inv: 6_145,
    strength: 128,
    oid: "1.3.6.1.4.1.8301.3.1.3.3.1",
    fft: FftParams { n: 512, q: 12_289 },
};

const BLISS_III: ParameterSet = ParameterSet {
    variant: Variant::BlissIii,
    variant_id: 3,
    n: 512,
    n_bits: 9,
    q: 12_289,
    p: 24,
    d: 10,
    sigma: 250.54,
    kappa: 30,
    m: 90_000,
    delta1: 216,
    delta2: 16,
    nk_max: 90_000,
    b_inf: 1_965,
    b_l2: 11_074,
    q2_inv: 6_145,
    strength: 160,
    oid: "1.3.6.1.4.1.8301.3.1.3.3.3",
    fft: FftParams { n: 512, q: 12_289 },
};

const BLISS_IV: ParameterSet = ParameterSet {
    variant: Variant::BlissIv,
    variant_id: 4,
    n: 512,
    n_bits: 9,
    q: 12_289,
    p: 24,
    d: 10,
    sigma: 271.93,
    kappa: 39,
    m: 120_000,
    delta1: 231,
    delta2: 31,
    nk_max: 120_000,
    b_inf: 1_884,
    b_l2: 10_968,
    q2_inv: 6_145,
    strength: 192,
    oid: "1.3.6.1.4.1.8301.3.1.3.3.4",
    fft: FftParams { n: 512, q: 12_289 },
};

static REGISTRY: [&ParameterSet; 3] = [&BLISS_I, &BLISS_III, &BLISS_IV];

/// Look up a parameter set by its numeric variant id (1, 3, or 4).
pub fn by_variant_id(variant_id: u8) -> Result<&'static ParameterSet, BlissError> {
    let set = REGISTRY
        .iter()
        .find(|set| set.variant_id == variant_id)
        .ok_or(BlissError::ConfigurationError("unknown BLISS variant id"))?;
    set.validate()?;
    Ok(set)
}

/// Look up a parameter set by its dotted-decimal OID.
pub fn by_oid(oid: &str) -> Result<&'static ParameterSet, BlissError> {
    let set = REGISTRY
        .iter()
        .find(|set| set.oid == oid)
        .ok_or(BlissError::ConfigurationError("unknown BLISS OID"))?;
    set.validate()?;
    Ok(set)
}
