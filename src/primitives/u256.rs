//! 256-bit unsigned integer primitive
//!
//! This module defines a fixed-size 256-bit value type (`U256`) which
//! carries SHA-256 digests.
//!
//! It is a **simple, explicit value type**, not a big-integer arithmetic
//! library. The internal representation is big-endian, which is the order
//! in which SHA-256 emits its state words and the order in which digests
//! are conventionally printed.

use std::fmt::{Display, Formatter, LowerHex, Result, UpperHex};
use std::str::FromStr;

mod conv;

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as 32 bytes in **big-endian** order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256(pub(crate) [u8; 32]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 32]);

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([255u8; 32]);

    /// Counts the number of leading zero bits in the integer.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=256`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &byte in self.0.iter() {
            if byte == 0 {
                count += 8;
            } else {
                count += byte.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Returns the value as 64 lowercase hexadecimal characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Display for U256 {
    /// Formats the value as 64 lowercase hexadecimal characters with no
    /// separators, the usual rendering of a SHA-256 digest.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        LowerHex::fmt(self, f)
    }
}

impl LowerHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl UpperHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&hex::encode_upper(self.0))
    }
}

impl FromStr for U256 {
    type Err = hex::FromHexError;

    /// Parses exactly 64 hexadecimal characters, in either case.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut out = [0u8; 32];
        hex::decode_to_slice(s, &mut out)?;

        Ok(U256(out))
    }
}
