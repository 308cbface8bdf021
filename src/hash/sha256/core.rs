//! SHA-256 core hashing functions
//!
//! Padding, block parsing, compression and digest assembly for a complete
//! message. The message is hashed in one call; there is no incremental
//! state between calls.

use super::computations::{all_rounds, message_schedule};
use super::padding::pad_message;
use super::parse::parse_message;
use super::{Block, DIGEST_LEN, H256_INIT};
use crate::primitives::U256;

/// Compresses a single 512-bit block into `state`.
///
/// The block is expanded into its message schedule, mixed through 64
/// rounds, and the result is added word-wise into `state`.
#[inline(always)]
pub fn compress(block: &Block, state: &mut [u32; 8]) {
    let w = message_schedule(block);

    all_rounds(state, &w);
}

/// Computes the SHA-256 hash of `input`.
///
/// Blocks are compressed strictly in order, each one starting from the
/// state the previous block left behind.
pub fn sha256(input: &[u8]) -> U256 {
    let mut state = *H256_INIT;

    let padded = pad_message(input);

    for block in parse_message(&padded) {
        compress(block, &mut state);
    }

    U256::from(state)
}

/// Computes the SHA-256 digest of `input` as raw big-endian bytes.
pub fn digest(input: &[u8]) -> [u8; DIGEST_LEN] {
    sha256(input).into()
}
