//! Shared data generators for the benchmarks.
#![allow(dead_code)]

use bitarray::BitArray;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Array lengths exercised by every benchmark group.
pub const SIZES: [usize; 4] = [64, 1_024, 65_536, 1_048_576];

/// Seeded generator so runs are comparable.
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x0B17_A77A)
}

/// Array with each bit set independently with probability `density`.
pub fn random_bits(len: usize, density: f64) -> BitArray {
    let mut rng = rng();
    BitArray::from_bools((0..len).map(|_| rng.gen_bool(density)))
}

/// Array with exactly one set bit, at the last position.
pub fn last_bit_only(len: usize) -> BitArray {
    let mut bits = BitArray::new(len);
    bits.set(len - 1, true).expect("len > 0");
    bits
}

/// Per-bit XOR through the indexed API, the baseline for the byte-wise operator.
pub fn naive_xor(a: &mut BitArray, b: &BitArray) {
    for index in 0..a.len() {
        let bit = a.get(index).expect("in range") ^ b.get(index).expect("in range");
        a.set(index, bit).expect("in range");
    }
}

/// Bit-by-bit scan through the indexed API, the baseline for `next_set_bit`.
pub fn naive_next_set_bit(bits: &BitArray, from: usize) -> Option<usize> {
    (from..bits.len()).find(|&index| bits.get(index).unwrap_or(false))
}
