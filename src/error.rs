//! Error types for bit array operations.
//!
//! Every fallible operation in this crate reports one of four conditions:
//! an index outside the array, a bulk operator between arrays of different
//! sizes, an attempt to remove an index, or malformed encoded input.
//! Errors are returned synchronously at the offending call and no operation
//! mutates the array before it has validated its arguments.
//!
//! # Error Propagation
//!
//! ```
//! use bitarray::{BitArray, Result};
//!
//! fn first_set_after_complement(bits: &str, from: usize) -> Result<Option<usize>> {
//!     let mut array = BitArray::from_bit_string(bits);
//!     array.apply_complement();
//!     array.next_set_bit(from)
//! }
//! # assert_eq!(first_set_after_complement("1101", 0).unwrap(), Some(2));
//! # assert!(first_set_after_complement("1101", 5).is_err());
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias for bit array operations.
///
/// All fallible operations return [`Result<T>`] where the error type is
/// [`BitArrayError`].
///
/// # Examples
/// ```
/// use bitarray::{BitArray, Result};
///
/// fn second_bit(bits: &BitArray) -> Result<bool> {
///     bits.get(1)
/// }
/// # assert!(second_bit(&BitArray::from_bit_string("01")).unwrap());
/// ```
pub type Result<T> = std::result::Result<T, BitArrayError>;

/// Errors that can occur while operating on a [`BitArray`](crate::BitArray).
///
/// # Design Notes
/// - `Clone` + `PartialEq` enable testing and error comparison
/// - Every variant carries the values needed to explain the failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitArrayError {
    /// Indexed access or scan start outside the array.
    ///
    /// For `get` and `set` the valid range is `[0, length)`; a scan may
    /// also start at exactly `length`.
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Logical length of the bit array.
        length: usize,
    },

    /// Bulk operator invoked between arrays of different lengths.
    SizeMismatch {
        /// Length of the array being modified.
        left: usize,
        /// Length of the operand.
        right: usize,
    },

    /// The operation is not supported by a fixed-size bit array.
    ///
    /// Removing an index would change the domain of valid indices, which
    /// is fixed at construction.
    UnsupportedOperation {
        /// Name of the operation attempted.
        operation: String,
    },

    /// Encoded input could not be decoded into a bit array.
    DecodeError {
        /// Description of what failed.
        message: String,
    },
}

impl fmt::Display for BitArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, length } => {
                write!(
                    f,
                    "Index {} out of range for bit array of length {}",
                    index, length
                )
            }
            Self::SizeMismatch { left, right } => {
                write!(
                    f,
                    "Bit array size mismatch: {} vs {}. Operands must be of equal size.",
                    left, right
                )
            }
            Self::UnsupportedOperation { operation } => {
                write!(
                    f,
                    "Operation '{}' is not supported by a fixed-size bit array.",
                    operation
                )
            }
            Self::DecodeError { message } => {
                write!(f, "Decode error: {}.", message)
            }
        }
    }
}

impl std::error::Error for BitArrayError {}

impl BitArrayError {
    /// Create an `OutOfRange` error.
    #[must_use]
    pub fn out_of_range(index: usize, length: usize) -> Self {
        Self::OutOfRange { index, length }
    }

    /// Create a `SizeMismatch` error.
    #[must_use]
    pub fn size_mismatch(left: usize, right: usize) -> Self {
        Self::SizeMismatch { left, right }
    }

    /// Create an `UnsupportedOperation` error.
    #[must_use]
    pub fn unsupported_operation(operation: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            operation: operation.into(),
        }
    }

    /// Create a `DecodeError`.
    ///
    /// # Examples
    /// ```
    /// use bitarray::BitArrayError;
    ///
    /// let err = BitArrayError::decode_error("expected a JSON array");
    /// assert!(err.to_string().contains("JSON array"));
    /// ```
    #[must_use]
    pub fn decode_error(message: impl Into<String>) -> Self {
        Self::DecodeError {
            message: message.into(),
        }
    }
}
