//! bitarray: fixed-size packed bit arrays for Rust.
//!
//! A [`BitArray`] is an ordered sequence of booleans packed eight to a byte.
//! Its length is set once at construction. It supports bounds-checked indexed
//! access, in-place boolean algebra, a byte-skipping scan for the next set
//! bit, ordered iteration, and round trips through a `'0'`/`'1'` string and a
//! JSON array of booleans.
//!
//! # Quick Start
//!
//! ```
//! use bitarray::BitArray;
//!
//! let mut bits = BitArray::from_bit_string("10010");
//!
//! bits.apply_complement();
//! assert_eq!(bits.to_string(), "01101");
//!
//! bits.apply_xor(&BitArray::from_bools([true, false, false, false, true]))?;
//! assert_eq!(bits.to_string(), "11100");
//!
//! bits.set(4, true)?;
//! assert_eq!(bits.to_string(), "11101");
//!
//! let pairs: Vec<(usize, bool)> = bits.iter().collect();
//! assert_eq!(pairs[3], (3, false));
//! # Ok::<(), bitarray::BitArrayError>(())
//! ```
//!
//! # Scanning
//!
//! [`BitArray::next_set_bit`] skips whole zero bytes instead of testing one
//! bit at a time:
//!
//! ```
//! use bitarray::BitArray;
//!
//! let bits = BitArray::from_bit_string("1100000000000010");
//! assert_eq!(bits.next_set_bit(4)?, Some(14));
//! assert_eq!(bits.next_set_bit(15)?, None);
//! assert_eq!(bits.next_set_bit(16)?, None);
//! assert!(bits.next_set_bit(17).is_err());
//! # Ok::<(), bitarray::BitArrayError>(())
//! ```
//!
//! # Errors
//!
//! Every size-sensitive operation returns [`Result`]. See [`BitArrayError`]
//! for the four failure kinds. No operation mutates the array before it has
//! validated its arguments.
//!
//! # Features
//!
//! - `serde` (default) - `Serialize`/`Deserialize` as a boolean sequence,
//!   plus [`BitArray::from_json`] and [`BitArray::to_json`]
//! - `trace` - `tracing` events for construction, bulk operators and decode failures
//!
//! # Concurrency
//!
//! `BitArray` has no internal synchronization. Mutation takes `&mut self`;
//! share a mutable array across threads by wrapping it in a `Mutex` or
//! `RwLock`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::bool_assert_comparison)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod core;
pub mod error;
pub mod util;

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod serde_support;

pub use crate::core::{BitArray, Iter, IterOnes};
pub use error::{BitArrayError, Result};

/// Commonly used types and traits.
///
/// ```
/// use bitarray::prelude::*;
///
/// let mut bits = BitArray::new(4);
/// bits.set_bit(2, true).unwrap();
/// assert_eq!(bits.encode_bit_string(), "0010");
/// ```
pub mod prelude {
    pub use crate::core::{BitAlgebra, BitArray, BitEncode, BitLength, IndexedBits};
    pub use crate::error::{BitArrayError, Result};
}
