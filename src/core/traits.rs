//! Capability traits for packed bit containers.
//!
//! A bit array is at once indexable, sized, iterable and encodable. Rather
//! than one wide trait, each capability is its own trait so generic code can
//! ask only for what it uses.
//!
//! # Trait Hierarchy
//!
//! ```text
//! BitLength (number of addressable positions)
//!     ├── IndexedBits (bounds-checked get/set, fixed index domain)
//!     │       └── BitEncode (bit-string and boolean-sequence views)
//!     └── BitAlgebra (in-place complement / and / or / xor)
//! ```
//!
//! [`BitArray`] implements all four.
//!
//! # Examples
//!
//! ```
//! use bitarray::core::{BitAlgebra, BitEncode, IndexedBits};
//! use bitarray::BitArray;
//!
//! fn flip_all<B: BitAlgebra + BitEncode>(bits: &mut B) -> String {
//!     bits.complement();
//!     bits.encode_bit_string()
//! }
//!
//! let mut bits = BitArray::from_bit_string("1001");
//! assert_eq!(flip_all(&mut bits), "0110");
//! assert!(bits.get_bit(1).unwrap());
//! ```

use crate::core::bitarray::BitArray;
use crate::error::{BitArrayError, Result};

/// Containers with a fixed number of addressable bit positions.
pub trait BitLength {
    /// Number of addressable positions.
    fn bit_len(&self) -> usize;

    /// Check whether there are no addressable positions.
    fn is_empty(&self) -> bool {
        self.bit_len() == 0
    }
}

/// Bounds-checked indexed access over a fixed index domain.
///
/// # Contract
///
/// * `get_bit(i)` and `set_bit(i, _)` fail with
///   [`BitArrayError::OutOfRange`] exactly when `!contains_index(i)`
/// * `set_bit` is idempotent
/// * The index domain never changes, so `remove_bit` always fails
pub trait IndexedBits: BitLength {
    /// Read the bit at `index`.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::OutOfRange`] when `index >= bit_len()`.
    fn get_bit(&self, index: usize) -> Result<bool>;

    /// Write the bit at `index`.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::OutOfRange`] when `index >= bit_len()`.
    fn set_bit(&mut self, index: usize, value: bool) -> Result<()>;

    /// Check whether `index` is addressable.
    fn contains_index(&self, index: usize) -> bool {
        index < self.bit_len()
    }

    /// Remove the position `index` from the container.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::UnsupportedOperation`] unless overridden.
    fn remove_bit(&mut self, index: usize) -> Result<()> {
        let _ = index;
        Err(BitArrayError::unsupported_operation("remove_bit"))
    }
}

/// In-place bitwise algebra between containers of equal length.
pub trait BitAlgebra: BitLength {
    /// Invert every bit.
    fn complement(&mut self);

    /// Bitwise AND with `other`.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::SizeMismatch`] when the lengths differ.
    fn and(&mut self, other: &Self) -> Result<()>;

    /// Bitwise OR with `other`.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::SizeMismatch`] when the lengths differ.
    fn or(&mut self, other: &Self) -> Result<()>;

    /// Bitwise XOR with `other`.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::SizeMismatch`] when the lengths differ.
    fn xor(&mut self, other: &Self) -> Result<()>;
}

/// Textual and structured views derived from indexed access.
///
/// The default methods read one bit at a time through
/// [`IndexedBits::get_bit`]; implementors with direct buffer access may
/// override them.
pub trait BitEncode: IndexedBits {
    /// `'0'`/`'1'` string, index 0 first.
    fn encode_bit_string(&self) -> String {
        (0..self.bit_len())
            .map(|index| match self.get_bit(index) {
                Ok(true) => '1',
                _ => '0',
            })
            .collect()
    }

    /// Ordered booleans, index 0 first.
    fn encode_bools(&self) -> Vec<bool> {
        (0..self.bit_len())
            .map(|index| self.get_bit(index).unwrap_or(false))
            .collect()
    }
}

impl BitLength for BitArray {
    #[inline]
    fn bit_len(&self) -> usize {
        self.len()
    }
}

impl IndexedBits for BitArray {
    #[inline]
    fn get_bit(&self, index: usize) -> Result<bool> {
        self.get(index)
    }

    #[inline]
    fn set_bit(&mut self, index: usize, value: bool) -> Result<()> {
        self.set(index, value).map(|_| ())
    }

    fn remove_bit(&mut self, index: usize) -> Result<()> {
        self.unset(index)
    }
}

impl BitAlgebra for BitArray {
    fn complement(&mut self) {
        self.apply_complement();
    }

    fn and(&mut self, other: &Self) -> Result<()> {
        self.apply_and(other).map(|_| ())
    }

    fn or(&mut self, other: &Self) -> Result<()> {
        self.apply_or(other).map(|_| ())
    }

    fn xor(&mut self, other: &Self) -> Result<()> {
        self.apply_xor(other).map(|_| ())
    }
}

impl BitEncode for BitArray {
    fn encode_bit_string(&self) -> String {
        self.to_bit_string()
    }

    fn encode_bools(&self) -> Vec<bool> {
        self.to_bools()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal unpacked container used to check the default methods.
    struct Unpacked(Vec<bool>);

    impl BitLength for Unpacked {
        fn bit_len(&self) -> usize {
            self.0.len()
        }
    }

    impl IndexedBits for Unpacked {
        fn get_bit(&self, index: usize) -> Result<bool> {
            self.0
                .get(index)
                .copied()
                .ok_or_else(|| BitArrayError::out_of_range(index, self.0.len()))
        }

        fn set_bit(&mut self, index: usize, value: bool) -> Result<()> {
            let len = self.0.len();
            let slot = self
                .0
                .get_mut(index)
                .ok_or_else(|| BitArrayError::out_of_range(index, len))?;
            *slot = value;
            Ok(())
        }
    }

    impl BitEncode for Unpacked {}

    fn first_set<B: IndexedBits>(bits: &B) -> Option<usize> {
        (0..bits.bit_len()).find(|&i| bits.get_bit(i).unwrap_or(false))
    }

    #[test]
    fn test_default_encoders_match_packed() {
        let values = vec![true, false, false, true, true, false, true, false, true];
        let unpacked = Unpacked(values.clone());
        let packed = BitArray::from_bools(values);

        assert_eq!(unpacked.encode_bit_string(), packed.encode_bit_string());
        assert_eq!(unpacked.encode_bools(), packed.encode_bools());
    }

    #[test]
    fn test_remove_bit_default_unsupported() {
        let mut unpacked = Unpacked(vec![true]);
        assert!(matches!(
            unpacked.remove_bit(0),
            Err(BitArrayError::UnsupportedOperation { .. })
        ));

        let mut packed = BitArray::new(1);
        assert!(matches!(
            packed.remove_bit(0),
            Err(BitArrayError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn test_generic_indexed_access() {
        let mut packed = BitArray::new(12);
        packed.set_bit(9, true).unwrap();
        assert_eq!(first_set(&packed), Some(9));
        assert_eq!(packed.next_set_bit(0).unwrap(), first_set(&packed));

        assert!(packed.contains_index(11));
        assert!(!IndexedBits::contains_index(&packed, 12));
        assert!(packed.set_bit(12, true).is_err());
    }

    #[test]
    fn test_algebra_through_trait() {
        let mut a = BitArray::from_bit_string("0011");
        let b = BitArray::from_bit_string("0101");

        a.xor(&b).unwrap();
        assert_eq!(a.encode_bit_string(), "0110");
        a.and(&b).unwrap();
        assert_eq!(a.encode_bit_string(), "0100");
        a.or(&b).unwrap();
        assert_eq!(a.encode_bit_string(), "0101");
        a.complement();
        assert_eq!(a.encode_bit_string(), "1010");

        assert!(a.or(&BitArray::new(5)).is_err());
    }

    #[test]
    fn test_is_empty_default() {
        assert!(BitLength::is_empty(&Unpacked(Vec::new())));
        assert!(!BitLength::is_empty(&BitArray::new(1)));
    }
}
