//! Serialization support for bit arrays.
//!
//! # Feature Flag
//!
//! This module is only available when the `serde` feature is enabled (it is
//! on by default):
//!
//! ```toml
//! [dependencies]
//! bitarray = { version = "0.1", features = ["serde"] }
//! ```
//!
//! # Serialization Format
//!
//! A [`BitArray`](crate::BitArray) serializes as a sequence of booleans, one
//! per bit, index 0 first. In JSON that is `[true,false,...]`. The
//! `Serialize`/`Deserialize` impls work with any serde format; the
//! [`json`] module adds `from_json`/`to_json` helpers that report
//! failures as [`BitArrayError::DecodeError`](crate::BitArrayError).
//!
//! # Examples
//!
//! ```
//! use bitarray::BitArray;
//!
//! let bits = BitArray::from_bit_string("101");
//!
//! let json = serde_json::to_string(&bits).unwrap();
//! assert_eq!(json, "[true,false,true]");
//!
//! let restored: BitArray = serde_json::from_str(&json).unwrap();
//! assert_eq!(restored.to_bit_string(), "101");
//! ```

pub mod json;

use crate::error::BitArrayError;

/// Failures while decoding an encoded bit array.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Input is not well-formed JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Input is JSON but not an array
    #[error("expected a JSON array of booleans, found {found}")]
    NotAnArray {
        /// Kind of JSON value that was found instead
        found: &'static str,
    },

    /// An array element is not a boolean
    #[error("element {index} is not a boolean (found {found})")]
    NotABoolean {
        /// Position of the offending element
        index: usize,
        /// Kind of JSON value that was found instead
        found: &'static str,
    },
}

impl From<CodecError> for BitArrayError {
    fn from(err: CodecError) -> Self {
        BitArrayError::decode_error(err.to_string())
    }
}
