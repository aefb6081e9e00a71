//! Sparse Vector Sampler (component D): `create_vector_from_seed`.
//!
//! Ported from `bliss_private_key.c`'s function of the same name: draw
//! `delta1` distinct positions for magnitude-1 entries, then `delta2`
//! further distinct positions for magnitude-2 entries, each position
//! drawn by rejection sampling (redraw on collision) from the MGF1
//! bit-spender, with an independent fair-coin sign per position.

use crate::bitspender::BitSpender;
use crate::error::BlissError;
use crate::hasher::HashAlgorithm;

/// Builds a ternary sparse vector of length `n` with exactly `delta1`
/// entries of magnitude 1 and `delta2` entries of magnitude 2, all other
/// entries zero, deterministically derived from `seed` via MGF1 over
/// `algo`.
pub fn create_vector_from_seed(
    seed: &[u8],
    algo: HashAlgorithm,
    n: usize,
    n_bits: u32,
    delta1: usize,
    delta2: usize,
) -> Result<Vec<i8>, BlissError> {
    let mut spender = BitSpender::new(algo, seed);
    let mut v = vec![0i8; n];

    draw_positions(&mut spender, &mut v, n, n_bits, delta1, 1)?;
    draw_positions(&mut spender, &mut v, n, n_bits, delta2, 2)?;

    Ok(v)
}

fn draw_positions(
    spender: &mut BitSpender,
    v: &mut [i8],
    n: usize,
    n_bits: u32,
    count: usize,
    magnitude: i8,
) -> Result<(), BlissError> {
    let mut drawn = 0;
    while drawn < count {
        let index = spender.next_bits(n_bits)? as usize;
        if index >= n || v[index] != 0 {
            continue;
        }
        let sign = spender.next_bit()?;
        v[index] = if sign { magnitude } else { -magnitude };
        drawn += 1;
    }
    Ok(())
}
