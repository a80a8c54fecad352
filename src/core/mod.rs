//! Core types and traits.
//!
//! # Module Organization
//!
//! ```text
//! core/
//! ├── bitarray.rs  - Packed storage, construction, access, algebra, scanning
//! ├── iter.rs      - Borrowing iterators (pairs and set indices)
//! ├── traits.rs    - Capability traits (length, indexed access, algebra, encoding)
//! └── mod.rs       - This file (public API)
//! ```
//!
//! # Examples
//!
//! ```
//! use bitarray::core::BitArray;
//!
//! let mut bits = BitArray::from_size(16);
//! bits.set(3, true).unwrap();
//! bits.set(12, true).unwrap();
//!
//! assert_eq!(bits.iter_ones().collect::<Vec<_>>(), vec![3, 12]);
//! assert_eq!(bits.next_set_bit(4).unwrap(), Some(12));
//! ```

pub mod bitarray;
pub mod iter;
pub mod traits;

pub use bitarray::BitArray;
pub use iter::{Iter, IterOnes};
pub use traits::{BitAlgebra, BitEncode, BitLength, IndexedBits};
