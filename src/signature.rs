//! Signature entity and challenge extraction (component I, spec.md §3 /
//! §4.I `generate_c`).
//!
//! Ported from `bliss_private_key.c`'s challenge-hash loop inside
//! `sign_bliss_with_sha512`: seed a SHA-512 context with `data_hash ||
//! serialize(ud)`, then repeatedly hash-and-parse `kappa` distinct
//! indices from the digest stream, rehashing (incrementing a counter) on
//! exhaustion and rejecting duplicate indices.

use crate::error::BlissError;
use crate::hasher::{HashAlgorithm, Hasher};

/// `z1`, `z2ᵈ`, and the κ nonzero positions of the challenge polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub z1: Vec<i32>,
    pub z2d: Vec<i16>,
    pub c_indices: Vec<u16>,
}

impl Signature {
    /// The encoder named by spec.md §4.H step 13: a flat, length-prefixed
    /// byte encoding (big-endian `n`, `kappa`, then `z1`, `z2d`,
    /// `c_indices` in that order). No ASN.1 structure is specified for
    /// signatures in spec.md (unlike the private key, §6); this is the
    /// minimal concrete encoding the signing facade needs to return
    /// `signature_bytes` at all.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + self.z1.len() * 4 + self.z2d.len() * 2 + self.c_indices.len() * 2);
        out.extend_from_slice(&(self.z1.len() as u32).to_be_bytes());
        out.extend_from_slice(&(self.c_indices.len() as u32).to_be_bytes());
        for &v in &self.z1 {
            out.extend_from_slice(&v.to_be_bytes());
        }
        for &v in &self.z2d {
            out.extend_from_slice(&v.to_be_bytes());
        }
        for &v in &self.c_indices {
            out.extend_from_slice(&v.to_be_bytes());
        }
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BlissError> {
        if bytes.len() < 8 {
            return Err(BlissError::EncodingError("signature too short"));
        }
        let n = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
        let kappa = u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize;
        let expected_len = 8 + n * 4 + n * 2 + kappa * 2;
        if bytes.len() != expected_len {
            return Err(BlissError::EncodingError("signature length mismatch"));
        }

        let mut offset = 8;
        let mut z1 = Vec::with_capacity(n);
        for _ in 0..n {
            z1.push(i32::from_be_bytes(bytes[offset..offset + 4].try_into().unwrap()));
            offset += 4;
        }
        let mut z2d = Vec::with_capacity(n);
        for _ in 0..n {
            z2d.push(i16::from_be_bytes(bytes[offset..offset + 2].try_into().unwrap()));
            offset += 2;
        }
        let mut c_indices = Vec::with_capacity(kappa);
        for _ in 0..kappa {
            c_indices.push(u16::from_be_bytes(bytes[offset..offset + 2].try_into().unwrap()));
            offset += 2;
        }

        Ok(Signature { z1, z2d, c_indices })
    }
}

/// `generate_c(hash, data_hash, ud, n, kappa)`: derives `kappa` distinct
/// indices in `[0, n)` from `data_hash || serialize(ud)`, defining the
/// support of the κ-sparse challenge polynomial `c`.
///
/// `ud`'s serialization is its big-endian `i16` encoding, matching how the
/// original hands the raw coefficient array to the hasher.
pub fn generate_c(
    data_hash: &[u8],
    ud: &[i16],
    n: usize,
    kappa: usize,
) -> Result<Vec<u16>, BlissError> {
    debug_assert!(kappa <= n);
    let mut seed = Vec::with_capacity(data_hash.len() + ud.len() * 2);
    seed.extend_from_slice(data_hash);
    for &v in ud {
        seed.extend_from_slice(&v.to_be_bytes());
    }

    let index_bits = (usize::BITS - (n - 1).leading_zeros()).max(1);
    let mut indices: Vec<u16> = Vec::with_capacity(kappa);
    let mut counter: u32 = 0;

    // Unbounded in principle, bounded in practice by the same defensive
    // cap `BitSpender` applies to its own re-hash rounds.
    const MAX_ROUNDS: u32 = 1 << 20;
    while indices.len() < kappa {
        if counter >= MAX_ROUNDS {
            return Err(BlissError::SamplerError("challenge hash stream exhausted"));
        }
        let mut hasher = Hasher::create(HashAlgorithm::Sha512);
        hasher.update(&seed);
        hasher.update(&counter.to_be_bytes());
        let digest = hasher.finalize();
        counter += 1;

        let mut bit_pos = 0usize;
        let digest_bits = digest.len() * 8;
        while bit_pos + index_bits as usize <= digest_bits && indices.len() < kappa {
            let mut value: u32 = 0;
            for b in 0..index_bits {
                let byte = digest[(bit_pos + b as usize) / 8];
                let bit = (byte >> (7 - (bit_pos + b as usize) % 8)) & 1;
                value = (value << 1) | bit as u32;
            }
            bit_pos += index_bits as usize;

            let index = value as usize;
            if index >= n {
                continue;
            }
            let idx16 = index as u16;
            if indices.contains(&idx16) {
                continue;
            }
            indices.push(idx16);
        }
    }

    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_kappa_distinct_indices_within_range() {
        let data_hash = [7u8; 64];
        let ud = vec![1i16, -2, 3, -4, 5, -6, 7, -8];
        let indices = generate_c(&data_hash, &ud, 512, 23).unwrap();
        assert_eq!(indices.len(), 23);
        assert!(indices.iter().all(|&i| (i as usize) < 512));
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), indices.len());
    }

    #[test]
    fn deterministic_for_identical_input() {
        let data_hash = [3u8; 64];
        let ud = vec![0i16; 512];
        let a = generate_c(&data_hash, &ud, 512, 23).unwrap();
        let b = generate_c(&data_hash, &ud, 512, 23).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_ud_gives_different_challenge() {
        let data_hash = [3u8; 64];
        let mut ud_a = vec![0i16; 512];
        let ud_b = ud_a.clone();
        ud_a[0] = 1;
        let a = generate_c(&data_hash, &ud_a, 512, 23).unwrap();
        let b = generate_c(&data_hash, &ud_b, 512, 23).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn byte_encoding_round_trips() {
        let sig = Signature {
            z1: vec![1, -2, 3, -4],
            z2d: vec![5, -6, 7, -8],
            c_indices: vec![0, 2],
        };
        let bytes = sig.to_bytes();
        let decoded = Signature::from_bytes(&bytes).unwrap();
        assert_eq!(sig, decoded);
    }

    #[test]
    fn truncated_bytes_are_an_encoding_error() {
        let sig = Signature {
            z1: vec![1, -2],
            z2d: vec![5, -6],
            c_indices: vec![0],
        };
        let mut bytes = sig.to_bytes();
        bytes.pop();
        assert!(Signature::from_bytes(&bytes).is_err());
    }
}
