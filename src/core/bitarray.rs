//! Fixed-size bit array packed into bytes.
//!
//! # Overview
//!
//! `BitArray` is a fixed-length sequence of booleans backed by a `Box<[u8]>`.
//! The length is chosen at construction and never changes; every index in
//! `[0, len)` stays addressable for the lifetime of the value.
//!
//! # Memory Layout
//!
//! Bits are packed into bytes least-significant bit first:
//!
//! ```text
//! Byte 0: [bit 0][bit 1]...[bit 7]
//! Byte 1: [bit 8][bit 9]...[bit 15]
//! Byte 2: [bit 16][bit 17]...[bit 23]
//! ```
//!
//! When `len` is not a multiple of 8 the high bits of the final byte are
//! padding. Padding is kept at zero after every public operation and is
//! never reported by `get`, scans, iteration or the encodings.
//!
//! # Performance Characteristics
//!
//! - Space: `⌈n/8⌉` bytes for `n` bits
//! - `get` / `set`: O(1)
//! - `apply_*`: O(n/8), one byte operation per eight bits
//! - `next_set_bit`: skips whole zero bytes, tests bits only in the first and the hit byte
//!
//! # Examples
//!
//! ```
//! use bitarray::BitArray;
//!
//! let mut bits = BitArray::from_bit_string("10010");
//! bits.apply_complement();
//! assert_eq!(bits.to_bit_string(), "01101");
//!
//! bits.apply_xor(&BitArray::from_bools([true, false, false, false, true])).unwrap();
//! assert_eq!(bits.to_bit_string(), "11100");
//!
//! bits.set(4, true).unwrap();
//! assert_eq!(bits.to_string(), "11101");
//! ```

use crate::core::iter::{Iter, IterOnes};
use crate::error::{BitArrayError, Result};
use crate::util::bitops::{
    bit_mask, bit_offset, bits_to_bytes, byte_index, count_ones_slice, lowest_set_bit,
    mask_from, tail_mask, BITS_PER_BYTE,
};
use std::fmt;
use std::ops::{BitAndAssign, BitOrAssign, BitXorAssign, Index, Not};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fixed-size array of bits packed eight to a byte.
///
/// # Type Properties
///
/// - `Clone`: Creates an independent copy with its own buffer
/// - `PartialEq`/`Eq`/`Hash`: Compare length and packed bytes (padding is always zero)
/// - `Send + Sync`: Plain owned bytes; mutation requires `&mut self`
/// - `Serde`: Sequence of booleans behind the `serde` feature flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitArray {
    /// Packed storage, exactly `⌈len / 8⌉` bytes.
    bytes: Box<[u8]>,

    /// Logical number of bits.
    len: usize,
}

/// Accumulates booleans into bytes, least-significant bit first.
///
/// Shared by every constructor that walks a source sequence, and by the
/// serde visitor.
#[derive(Debug, Default)]
pub(crate) struct Packer {
    bytes: Vec<u8>,
    current: u8,
    len: usize,
}

impl Packer {
    pub(crate) fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits_to_bytes(bits)),
            current: 0,
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, bit: bool) {
        if bit {
            self.current |= bit_mask(bit_offset(self.len));
        }

        self.len += 1;

        if bit_offset(self.len) == 0 {
            self.bytes.push(self.current);
            self.current = 0;
        }
    }

    pub(crate) fn finish(mut self) -> BitArray {
        if bit_offset(self.len) != 0 {
            self.bytes.push(self.current);
        }

        debug_assert_eq!(self.bytes.len(), bits_to_bytes(self.len));

        BitArray {
            bytes: self.bytes.into_boxed_slice(),
            len: self.len,
        }
    }
}

impl BitArray {
    /// Create a bit array of `len` bits, all cleared.
    ///
    /// A length of zero is valid and yields an empty array.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitarray::BitArray;
    ///
    /// let bits = BitArray::new(10);
    /// assert_eq!(bits.len(), 10);
    /// assert_eq!(bits.to_bit_string(), "0000000000");
    /// ```
    #[must_use]
    pub fn new(len: usize) -> Self {
        #[cfg(feature = "trace")]
        tracing::trace!(len, "BitArray::new");

        Self {
            bytes: vec![0u8; bits_to_bytes(len)].into_boxed_slice(),
            len,
        }
    }

    /// Create a bit array of `len` cleared bits.
    ///
    /// Alias of [`new`](Self::new).
    #[must_use]
    #[inline]
    pub fn from_size(len: usize) -> Self {
        Self::new(len)
    }

    /// Create a bit array from a sequence of booleans.
    ///
    /// Bit `i` of the result is the `i`-th element. The sequence is walked
    /// once and packed as it goes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitarray::BitArray;
    ///
    /// let bits = BitArray::from_bools([true, false, true]);
    /// assert_eq!(bits.to_bools(), vec![true, false, true]);
    /// ```
    #[must_use]
    pub fn from_bools<I>(values: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        Self::from_iter_with(values, |bit| bit)
    }

    /// Create a bit array from any sequence, deciding each bit with `truthy`.
    ///
    /// # Arguments
    ///
    /// * `values` - Source sequence; its length becomes the array length
    /// * `truthy` - Maps each element to the bit stored for it
    ///
    /// # Examples
    ///
    /// ```
    /// use bitarray::BitArray;
    ///
    /// let bits = BitArray::from_iter_with([0, 3, 0, -1], |n| n != 0);
    /// assert_eq!(bits.to_bit_string(), "0101");
    /// ```
    #[must_use]
    pub fn from_iter_with<I, F>(values: I, mut truthy: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> bool,
    {
        let values = values.into_iter();
        let mut packer = Packer::with_capacity(values.size_hint().0);

        for value in values {
            packer.push(truthy(value));
        }

        let bits = packer.finish();

        #[cfg(feature = "trace")]
        tracing::trace!(len = bits.len, "BitArray::from_iter_with");

        bits
    }

    /// Create a bit array from a string of `'0'` and `'1'` characters.
    ///
    /// Decoding is lenient: every character other than `'0'` is a set bit.
    /// The length is the number of characters (not bytes) of `s`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitarray::BitArray;
    ///
    /// let bits = BitArray::from_bit_string("1100000000000010");
    /// assert_eq!(bits.len(), 16);
    /// assert_eq!(bits.next_set_bit(4).unwrap(), Some(14));
    ///
    /// // Anything but '0' counts as set
    /// assert_eq!(BitArray::from_bit_string("0x0y").to_bit_string(), "0101");
    /// ```
    #[must_use]
    pub fn from_bit_string(s: &str) -> Self {
        Self::from_iter_with(s.chars(), |c| c != '0')
    }

    /// Get the number of bits in the array.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Get the number of addressable positions.
    ///
    /// This is the array length, not the number of set bits; see
    /// [`count_ones`](Self::count_ones) for the latter.
    #[must_use]
    #[inline]
    pub const fn count(&self) -> usize {
        self.len
    }

    /// Check whether the array has zero length.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check whether `index` addresses a bit of this array.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitarray::BitArray;
    ///
    /// let bits = BitArray::new(3);
    /// assert!(bits.contains_index(2));
    /// assert!(!bits.contains_index(3));
    /// ```
    #[must_use]
    #[inline]
    pub const fn contains_index(&self, index: usize) -> bool {
        index < self.len
    }

    /// Read-only view of the packed buffer (`⌈len / 8⌉` bytes).
    #[must_use]
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if self.contains_index(index) {
            Ok(())
        } else {
            Err(BitArrayError::out_of_range(index, self.len))
        }
    }

    /// Unchecked read; callers guarantee `index < len`.
    #[inline]
    fn bit(&self, index: usize) -> bool {
        self.bytes[byte_index(index)] & bit_mask(bit_offset(index)) != 0
    }

    /// Get the bit at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::OutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitarray::BitArray;
    ///
    /// let bits = BitArray::from_bit_string("01");
    /// assert!(!bits.get(0).unwrap());
    /// assert!(bits.get(1).unwrap());
    /// assert!(bits.get(2).is_err());
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.bit(index))
    }

    /// Set the bit at `index` to `value`.
    ///
    /// Setting a bit to the value it already holds has no effect. Returns
    /// `self` so calls can be chained.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::OutOfRange`] if `index >= len`; the array is
    /// left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitarray::BitArray;
    ///
    /// let mut bits = BitArray::new(4);
    /// bits.set(0, true)?.set(3, true)?.set(0, false)?;
    /// assert_eq!(bits.to_bit_string(), "0001");
    /// # Ok::<(), bitarray::BitArrayError>(())
    /// ```
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) -> Result<&mut Self> {
        self.check_index(index)?;

        let mask = bit_mask(bit_offset(index));
        let byte = &mut self.bytes[byte_index(index)];

        if value {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }

        Ok(self)
    }

    /// Remove the bit at `index`.
    ///
    /// The set of valid indices is fixed at construction, so removal always
    /// fails. Use [`set`](Self::set) with `false` to clear a bit.
    ///
    /// # Errors
    ///
    /// Always returns [`BitArrayError::UnsupportedOperation`].
    pub fn unset(&mut self, _index: usize) -> Result<()> {
        Err(BitArrayError::unsupported_operation("unset"))
    }

    /// Count the bits set to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitarray::BitArray;
    ///
    /// let mut bits = BitArray::from_bit_string("10110");
    /// assert_eq!(bits.count_ones(), 3);
    ///
    /// // Padding bits of the last byte are never counted
    /// bits.apply_complement();
    /// assert_eq!(bits.count_ones(), 2);
    /// ```
    #[must_use]
    pub fn count_ones(&self) -> usize {
        count_ones_slice(&self.bytes)
    }

    /// Zero the padding bits of the final byte.
    #[inline]
    fn clear_padding(&mut self) {
        let mask = tail_mask(self.len);
        if let Some(last) = self.bytes.last_mut() {
            *last &= mask;
        }
    }

    /// Invert every bit in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitarray::BitArray;
    ///
    /// let mut bits = BitArray::from_bit_string("10010");
    /// bits.apply_complement();
    /// assert_eq!(bits.to_bit_string(), "01101");
    /// ```
    pub fn apply_complement(&mut self) -> &mut Self {
        #[cfg(feature = "trace")]
        tracing::trace!(len = self.len, "BitArray::apply_complement");

        for byte in self.bytes.iter_mut() {
            *byte = !*byte;
        }

        self.clear_padding();
        self
    }

    fn check_same_len(&self, other: &Self) -> Result<()> {
        if self.len == other.len {
            Ok(())
        } else {
            #[cfg(feature = "trace")]
            tracing::debug!(
                left = self.len,
                right = other.len,
                "BitArray bulk operator size mismatch"
            );

            Err(BitArrayError::size_mismatch(self.len, other.len))
        }
    }

    /// Combine `other` into `self` byte by byte. Lengths must already match.
    #[inline]
    fn combine(&mut self, other: &Self, op: impl Fn(u8, u8) -> u8) {
        debug_assert_eq!(self.bytes.len(), other.bytes.len());

        for (a, &b) in self.bytes.iter_mut().zip(other.bytes.iter()) {
            *a = op(*a, b);
        }
    }

    /// Bitwise OR with another array of the same length, in place.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::SizeMismatch`] if the lengths differ; the
    /// array is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitarray::BitArray;
    ///
    /// let mut bits = BitArray::from_bit_string("1100");
    /// bits.apply_or(&BitArray::from_bit_string("1010"))?;
    /// assert_eq!(bits.to_bit_string(), "1110");
    /// # Ok::<(), bitarray::BitArrayError>(())
    /// ```
    pub fn apply_or(&mut self, other: &Self) -> Result<&mut Self> {
        self.check_same_len(other)?;

        #[cfg(feature = "trace")]
        tracing::trace!(len = self.len, "BitArray::apply_or");

        self.combine(other, |a, b| a | b);
        Ok(self)
    }

    /// Bitwise AND with another array of the same length, in place.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::SizeMismatch`] if the lengths differ; the
    /// array is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitarray::BitArray;
    ///
    /// let mut bits = BitArray::from_bit_string("1100");
    /// bits.apply_and(&BitArray::from_bit_string("1010"))?;
    /// assert_eq!(bits.to_bit_string(), "1000");
    /// # Ok::<(), bitarray::BitArrayError>(())
    /// ```
    pub fn apply_and(&mut self, other: &Self) -> Result<&mut Self> {
        self.check_same_len(other)?;

        #[cfg(feature = "trace")]
        tracing::trace!(len = self.len, "BitArray::apply_and");

        self.combine(other, |a, b| a & b);
        Ok(self)
    }

    /// Bitwise XOR with another array of the same length, in place.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::SizeMismatch`] if the lengths differ; the
    /// array is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitarray::BitArray;
    ///
    /// let mut bits = BitArray::from_bit_string("1100");
    /// bits.apply_xor(&BitArray::from_bit_string("1010"))?;
    /// assert_eq!(bits.to_bit_string(), "0110");
    /// # Ok::<(), bitarray::BitArrayError>(())
    /// ```
    pub fn apply_xor(&mut self, other: &Self) -> Result<&mut Self> {
        self.check_same_len(other)?;

        #[cfg(feature = "trace")]
        tracing::trace!(len = self.len, "BitArray::apply_xor");

        self.combine(other, |a, b| a ^ b);
        Ok(self)
    }

    /// Find the first set bit at or after `from`.
    ///
    /// Only the byte containing `from` is masked bit-wise; after it, whole
    /// zero bytes are skipped and the lowest set bit of the first nonzero
    /// byte is located with a trailing-zero count.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(i))` - Smallest `i >= from` with bit `i` set
    /// * `Ok(None)` - No set bit in `[from, len)`; always the case for `from == len`
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::OutOfRange`] if `from > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitarray::BitArray;
    ///
    /// let bits = BitArray::from_bit_string("1000000000000000000001");
    /// assert_eq!(bits.next_set_bit(0).unwrap(), Some(0));
    /// assert_eq!(bits.next_set_bit(1).unwrap(), Some(21));
    /// assert_eq!(bits.next_set_bit(22).unwrap(), None);
    /// assert!(bits.next_set_bit(23).is_err());
    /// ```
    pub fn next_set_bit(&self, from: usize) -> Result<Option<usize>> {
        if from > self.len {
            return Err(BitArrayError::out_of_range(from, self.len));
        }

        if from == self.len {
            return Ok(None);
        }

        let start = byte_index(from);
        let head = self.bytes[start] & mask_from(bit_offset(from));

        let hit = if head != 0 {
            Some((start, head))
        } else {
            self.bytes
                .iter()
                .enumerate()
                .skip(start + 1)
                .find(|&(_, &byte)| byte != 0)
                .map(|(index, &byte)| (index, byte))
        };

        Ok(hit
            .and_then(|(index, byte)| {
                lowest_set_bit(byte).map(|bit| index * BITS_PER_BYTE + bit)
            })
            .filter(|&index| index < self.len))
    }

    /// Iterate over `(index, bit)` pairs in ascending index order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitarray::BitArray;
    ///
    /// let bits = BitArray::from_bit_string("101");
    /// let pairs: Vec<_> = bits.iter().collect();
    /// assert_eq!(pairs, vec![(0, true), (1, false), (2, true)]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Iterate over the indices of set bits in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitarray::BitArray;
    ///
    /// let bits = BitArray::from_bit_string("0100000001");
    /// assert_eq!(bits.iter_ones().collect::<Vec<_>>(), vec![1, 9]);
    /// ```
    #[must_use]
    pub fn iter_ones(&self) -> IterOnes<'_> {
        IterOnes::new(self)
    }

    /// Render the array as a string of `'0'` and `'1'`, index 0 first.
    #[must_use]
    pub fn to_bit_string(&self) -> String {
        (0..self.len)
            .map(|index| if self.bit(index) { '1' } else { '0' })
            .collect()
    }

    /// Collect the array into a vector of booleans, index 0 first.
    #[must_use]
    pub fn to_bools(&self) -> Vec<bool> {
        (0..self.len).map(|index| self.bit(index)).collect()
    }
}

impl fmt::Display for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}

impl FromStr for BitArray {
    type Err = std::convert::Infallible;

    /// Parse a bit string; see [`BitArray::from_bit_string`].
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_bit_string(s))
    }
}

impl FromIterator<bool> for BitArray {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::from_bools(iter)
    }
}

impl From<&[bool]> for BitArray {
    fn from(values: &[bool]) -> Self {
        Self::from_bools(values.iter().copied())
    }
}

impl From<Vec<bool>> for BitArray {
    fn from(values: Vec<bool>) -> Self {
        Self::from_bools(values)
    }
}

impl<'a> IntoIterator for &'a BitArray {
    type Item = (usize, bool);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for BitArray {
    type Output = bool;

    /// # Panics
    ///
    /// Panics if `index >= len`, like slice indexing. Use
    /// [`BitArray::get`] for a fallible lookup.
    fn index(&self, index: usize) -> &bool {
        assert!(
            index < self.len,
            "BitArray index out of bounds: index={} len={}",
            index,
            self.len
        );

        if self.bit(index) {
            &true
        } else {
            &false
        }
    }
}

impl Not for BitArray {
    type Output = BitArray;

    fn not(mut self) -> BitArray {
        self.apply_complement();
        self
    }
}

impl Not for &BitArray {
    type Output = BitArray;

    fn not(self) -> BitArray {
        !self.clone()
    }
}

fn assert_same_len(op: &str, left: &BitArray, right: &BitArray) {
    assert!(
        left.len == right.len,
        "{}: bit array size mismatch: {} vs {}",
        op,
        left.len,
        right.len
    );
}

/// # Panics
///
/// Panics on length mismatch. Use [`BitArray::apply_and`] for a fallible call.
impl BitAndAssign<&BitArray> for BitArray {
    fn bitand_assign(&mut self, rhs: &BitArray) {
        assert_same_len("&=", self, rhs);
        self.combine(rhs, |a, b| a & b);
    }
}

/// # Panics
///
/// Panics on length mismatch. Use [`BitArray::apply_or`] for a fallible call.
impl BitOrAssign<&BitArray> for BitArray {
    fn bitor_assign(&mut self, rhs: &BitArray) {
        assert_same_len("|=", self, rhs);
        self.combine(rhs, |a, b| a | b);
    }
}

/// # Panics
///
/// Panics on length mismatch. Use [`BitArray::apply_xor`] for a fallible call.
impl BitXorAssign<&BitArray> for BitArray {
    fn bitxor_assign(&mut self, rhs: &BitArray) {
        assert_same_len("^=", self, rhs);
        self.combine(rhs, |a, b| a ^ b);
    }
}

// Serde support (feature-gated): a plain sequence of booleans
#[cfg(feature = "serde")]
impl Serialize for BitArray {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter().map(|(_, bit)| bit))
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for BitArray {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{SeqAccess, Visitor};

        struct BitArrayVisitor;

        impl<'de> Visitor<'de> for BitArrayVisitor {
            type Value = BitArray;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a sequence of booleans")
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<BitArray, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut packer = Packer::with_capacity(seq.size_hint().unwrap_or(0));

                while let Some(bit) = seq.next_element::<bool>()? {
                    packer.push(bit);
                }

                Ok(packer.finish())
            }
        }

        deserializer.deserialize_seq(BitArrayVisitor)
    }
}
