//! Byte-level bit manipulation helpers.
//!
//! The bit array stores bit `i` in byte `i / 8` at position `i % 8`
//! (least-significant bit first). These functions centralize that
//! addressing scheme along with the masks used by the scan and by the
//! padding bookkeeping of the final byte.
//!
//! # Performance Notes
//!
//! - All helpers are `const fn` and branch-light
//! - `lowest_set_bit` compiles to `TZCNT`/`BSF` on x86-64 and `RBIT`+`CLZ` on AArch64

#![allow(clippy::cast_possible_truncation)]

/// Number of bits stored in one byte of the packed buffer.
pub const BITS_PER_BYTE: usize = 8;

/// Calculate the number of bytes needed to store `n_bits` bits.
///
/// # Examples
///
/// ```
/// use bitarray::util::bitops::bits_to_bytes;
///
/// assert_eq!(bits_to_bytes(0), 0);
/// assert_eq!(bits_to_bytes(1), 1);
/// assert_eq!(bits_to_bytes(8), 1);
/// assert_eq!(bits_to_bytes(9), 2);
/// assert_eq!(bits_to_bytes(16), 2);
/// ```
#[inline]
#[must_use]
pub const fn bits_to_bytes(n_bits: usize) -> usize {
    n_bits / BITS_PER_BYTE + (n_bits % BITS_PER_BYTE != 0) as usize
}

/// Index of the byte holding the given bit.
///
/// # Examples
///
/// ```
/// use bitarray::util::bitops::byte_index;
///
/// assert_eq!(byte_index(0), 0);
/// assert_eq!(byte_index(7), 0);
/// assert_eq!(byte_index(8), 1);
/// assert_eq!(byte_index(23), 2);
/// ```
#[inline(always)]
#[must_use]
pub const fn byte_index(bit_index: usize) -> usize {
    bit_index >> 3
}

/// Position of the given bit inside its byte (`bit_index % 8`).
///
/// # Examples
///
/// ```
/// use bitarray::util::bitops::bit_offset;
///
/// assert_eq!(bit_offset(0), 0);
/// assert_eq!(bit_offset(7), 7);
/// assert_eq!(bit_offset(8), 0);
/// assert_eq!(bit_offset(13), 5);
/// ```
#[inline(always)]
#[must_use]
pub const fn bit_offset(bit_index: usize) -> usize {
    bit_index & 7
}

/// Single-bit mask for a position inside a byte.
///
/// `offset` must be below 8.
///
/// # Examples
///
/// ```
/// use bitarray::util::bitops::bit_mask;
///
/// assert_eq!(bit_mask(0), 0b0000_0001);
/// assert_eq!(bit_mask(3), 0b0000_1000);
/// assert_eq!(bit_mask(7), 0b1000_0000);
/// ```
#[inline(always)]
#[must_use]
pub const fn bit_mask(offset: usize) -> u8 {
    1u8 << offset
}

/// Mask keeping the bits at positions `offset..8` of a byte.
///
/// Used to discard the bits below a scan's starting point.
///
/// # Examples
///
/// ```
/// use bitarray::util::bitops::mask_from;
///
/// assert_eq!(mask_from(0), 0xFF);
/// assert_eq!(mask_from(3), 0b1111_1000);
/// assert_eq!(mask_from(7), 0b1000_0000);
/// ```
#[inline]
#[must_use]
pub const fn mask_from(offset: usize) -> u8 {
    0xFFu8 << offset
}

/// Mask of the bits of the final byte that belong to an array of `n_bits`.
///
/// Returns `0xFF` when the length is a multiple of eight (the final byte
/// is fully used, or there is no final byte).
///
/// # Examples
///
/// ```
/// use bitarray::util::bitops::tail_mask;
///
/// assert_eq!(tail_mask(0), 0xFF);
/// assert_eq!(tail_mask(5), 0b0001_1111);
/// assert_eq!(tail_mask(8), 0xFF);
/// assert_eq!(tail_mask(9), 0b0000_0001);
/// ```
#[inline]
#[must_use]
pub const fn tail_mask(n_bits: usize) -> u8 {
    match bit_offset(n_bits) {
        0 => 0xFF,
        used => !(0xFFu8 << used),
    }
}

/// Position of the lowest set bit of a byte, or `None` for zero.
///
/// # Examples
///
/// ```
/// use bitarray::util::bitops::lowest_set_bit;
///
/// assert_eq!(lowest_set_bit(0), None);
/// assert_eq!(lowest_set_bit(0b0000_0001), Some(0));
/// assert_eq!(lowest_set_bit(0b0110_0000), Some(5));
/// assert_eq!(lowest_set_bit(0b1000_0000), Some(7));
/// ```
#[inline(always)]
#[must_use]
pub const fn lowest_set_bit(byte: u8) -> Option<usize> {
    if byte == 0 {
        None
    } else {
        Some(byte.trailing_zeros() as usize)
    }
}

/// Count set bits across a byte slice.
///
/// # Examples
///
/// ```
/// use bitarray::util::bitops::count_ones_slice;
///
/// assert_eq!(count_ones_slice(&[0b1010, 0xFF, 0]), 10);
/// assert_eq!(count_ones_slice(&[]), 0);
/// ```
#[inline]
#[must_use]
pub fn count_ones_slice(bytes: &[u8]) -> usize {
    bytes.iter().map(|b| b.count_ones() as usize).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_to_bytes() {
        for n in 0..200 {
            assert_eq!(bits_to_bytes(n), (n + 7) / 8, "n = {}", n);
        }
        assert_eq!(bits_to_bytes(usize::MAX), usize::MAX / 8 + 1);
    }

    #[test]
    fn test_byte_index_and_offset_roundtrip() {
        for i in 0..100 {
            assert_eq!(byte_index(i) * BITS_PER_BYTE + bit_offset(i), i);
        }
    }

    #[test]
    fn test_bit_mask() {
        for offset in 0..8 {
            assert_eq!(bit_mask(offset).count_ones(), 1);
            assert_eq!(bit_mask(offset).trailing_zeros() as usize, offset);
        }
    }

    #[test]
    fn test_mask_from() {
        for offset in 0..8 {
            let mask = mask_from(offset);
            assert_eq!(mask.count_ones() as usize, 8 - offset);
            assert_eq!(mask.trailing_zeros() as usize, offset);
        }
    }

    #[test]
    fn test_tail_mask() {
        assert_eq!(tail_mask(1), 0b0000_0001);
        assert_eq!(tail_mask(7), 0b0111_1111);
        assert_eq!(tail_mask(16), 0xFF);
        assert_eq!(tail_mask(17), 0b0000_0001);
    }

    #[test]
    fn test_lowest_set_bit_every_byte() {
        assert_eq!(lowest_set_bit(0), None);
        for byte in 1..=255u8 {
            let naive = (0..8).find(|&i| byte & (1 << i) != 0);
            assert_eq!(lowest_set_bit(byte), naive, "byte = {:#010b}", byte);
        }
    }

    #[test]
    fn test_count_ones_slice() {
        assert_eq!(count_ones_slice(&[0xFF; 4]), 32);
        assert_eq!(count_ones_slice(&[0b1000_0001, 0b0100_0010]), 4);
    }
}
