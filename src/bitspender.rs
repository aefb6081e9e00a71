//! MGF1 Bit-Spender (component C, spec.md's "external contract" —
//! implemented here since no ecosystem crate exposes an MGF1 bit-level
//! consumer; the `Hasher` facade it is built from stays the real
//! contracted collaborator).
//!
//! Extracts a stream of variable-width unsigned integers and single bits
//! from a `(hash, seed)` pair, refilling its internal buffer by hashing
//! `seed || counter` (mask generation function 1, RFC 8017 §B.2.1),
//! matching the teacher's `FalconPrng` "stream with a cursor" shape but
//! driven by the MGF1 re-hash rule the original C sampler actually uses
//! instead of SHAKE.

use crate::error::BlissError;
use crate::hasher::{HashAlgorithm, Hasher};

/// Defensive cap on the number of MGF1 re-hash rounds a single
/// `BitSpender` will perform before reporting exhaustion. Chosen to be
/// unreachable in any realistic sampling run (spec.md's sparse sampler and
/// Gaussian sampler each need a handful of rounds at most) while still
/// giving the "bit stream exhausted" failure mode named in spec.md §4.D a
/// concrete trigger.
const MAX_ROUNDS: u32 = 1 << 20;

/// A stateful consumer of an MGF1 byte stream, yielding `k`-bit unsigned
/// integers and single bits on request.
pub struct BitSpender {
    algo: HashAlgorithm,
    seed: Vec<u8>,
    counter: u32,
    buffer: Vec<u8>,
    bit_pos: u8,
    byte_pos: usize,
}

impl BitSpender {
    pub fn new(algo: HashAlgorithm, seed: &[u8]) -> Self {
        BitSpender {
            algo,
            seed: seed.to_vec(),
            counter: 0,
            buffer: Vec::new(),
            bit_pos: 0,
            byte_pos: 0,
        }
    }

    fn refill(&mut self) -> Result<(), BlissError> {
        if self.counter >= MAX_ROUNDS {
            return Err(BlissError::SamplerError("MGF1 bit stream exhausted"));
        }
        let mut hasher = Hasher::create(self.algo);
        hasher.update(&self.seed);
        hasher.update(&self.counter.to_be_bytes());
        self.buffer = hasher.finalize();
        self.counter += 1;
        self.byte_pos = 0;
        self.bit_pos = 0;
        Ok(())
    }

    /// Returns the next single bit, most-significant-bit first within
    /// each byte.
    pub fn next_bit(&mut self) -> Result<bool, BlissError> {
        if self.byte_pos >= self.buffer.len() {
            self.refill()?;
        }
        let byte = self.buffer[self.byte_pos];
        let bit = (byte >> (7 - self.bit_pos)) & 1 == 1;
        self.bit_pos += 1;
        if self.bit_pos == 8 {
            self.bit_pos = 0;
            self.byte_pos += 1;
        }
        Ok(bit)
    }

    /// Returns the next `bits`-wide unsigned integer, built MSB-first from
    /// successive calls to [`Self::next_bit`]. `bits` must be `<= 32`.
    pub fn next_bits(&mut self, bits: u32) -> Result<u32, BlissError> {
        debug_assert!(bits <= 32);
        let mut value: u32 = 0;
        for _ in 0..bits {
            value = (value << 1) | self.next_bit()? as u32;
        }
        Ok(value)
    }
}
