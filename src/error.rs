//! Error kinds for the BLISS private-key core.
//!
//! Every fallible public operation returns `Result<T, BlissError>`. The
//! core never partially mutates a `PrivateKey` on error: a failed
//! generation returns no key, a failed signing attempt returns no
//! signature bytes.

use thiserror::Error;

/// Errors produced by key generation, signing, and encoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlissError {
    /// Unknown variant id, unknown OID, or a parameter set whose FFT
    /// parameters (n, q) disagree with the set itself.
    #[error("configuration error: {0}")]
    ConfigurationError(&'static str),

    /// ASN.1 parse failure, wrong OCTET STRING length, or truncated input.
    #[error("encoding error: {0}")]
    EncodingError(&'static str),

    /// The RNG failed to produce the requested number of bytes.
    #[error("entropy source failed: {0}")]
    EntropyError(&'static str),

    /// The MGF1 bit-spender could not be constructed, or its underlying
    /// bit stream was exhausted before the caller's request was satisfied.
    #[error("sampler error: {0}")]
    SamplerError(&'static str),

    /// 50 key-generation trials elapsed without producing an invertible,
    /// sufficiently short secret.
    #[error("key generation exhausted its trial budget")]
    KeyGenExhausted,

    /// `sign()` was called with a scheme other than SIGN_BLISS_WITH_SHA512.
    #[error("unsupported signature scheme")]
    UnsupportedScheme,

    /// The signing rejection loop exceeded a caller-configured retry cap
    /// (spec.md §9's Open Question: no cap exists in the original; this
    /// crate offers one opt-in, see `SigningDriver::with_retry_cap`).
    #[error("signing exhausted its configured retry cap")]
    SigningExhausted,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, BlissError>;
