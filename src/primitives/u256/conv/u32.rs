//! Conversions between `U256` and 32-bit word representations
//!
//! Eight 32-bit words are the shape of the SHA-256 hash state; turning the
//! final state into a `U256` is how a digest is assembled.

use crate::primitives::U256;

/// Converts a `U256` into eight 32-bit words.
///
/// The resulting array is ordered from most significant to least
/// significant word, using big-endian interpretation.
impl From<U256> for [u32; 8] {
    fn from(value: U256) -> Self {
        let mut out = [0u32; 8];

        for (o, chunk) in out.iter_mut().zip(value.0.chunks_exact(4)) {
            *o = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        out
    }
}

/// Converts eight 32-bit words into a `U256`.
///
/// Each word is written big-endian, first word first, so a final SHA-256
/// state converts directly into its digest.
impl From<[u32; 8]> for U256 {
    fn from(value: [u32; 8]) -> Self {
        let mut out = [0u8; 32];

        for (chunk, v) in out.chunks_exact_mut(4).zip(value) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        U256(out)
    }
}
