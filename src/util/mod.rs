//! Internal utility functions and helpers.
//!
//! # Modules
//!
//! - [`bitops`] - Byte-level addressing, masks and bit scanning primitives

pub mod bitops;

pub use bitops::{bits_to_bytes, lowest_set_bit};
