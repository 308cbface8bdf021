//! Conversion utilities
//!
//! Explicit conversions between `U256` and the representations a digest
//! passes through: raw bytes and the eight 32-bit state words.
//!
//! All conversions preserve big-endian order and never truncate silently.

mod u32;
mod u8;
