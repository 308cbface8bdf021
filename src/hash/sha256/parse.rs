//! Block parsing (FIPS 180-4 §5.2.1)
//!
//! Splits a padded message into 512-bit blocks and reads the big-endian
//! 32-bit words a block is made of. No byte is copied or transformed.

use super::{BLOCK_LEN, Block};

/// Number of 32-bit words in one block.
pub const WORDS_PER_BLOCK: usize = BLOCK_LEN / 4;

/// Splits a padded message into consecutive 64-byte blocks.
///
/// # Panics
/// Panics if `padded` is not a multiple of 64 bytes long. Padded messages
/// produced by [`pad_message`](super::padding::pad_message) always are.
pub fn parse_message(padded: &[u8]) -> impl ExactSizeIterator<Item = &Block> {
    assert!(
        padded.len() % BLOCK_LEN == 0,
        "padded message is {} bytes long, which is not a multiple of {BLOCK_LEN}",
        padded.len()
    );

    padded
        .chunks_exact(BLOCK_LEN)
        .map(|chunk| <&Block>::try_from(chunk).unwrap())
}

/// Assembles four bytes into a big-endian word.
#[inline(always)]
pub fn bytes_to_u32(b0: u8, b1: u8, b2: u8, b3: u8) -> u32 {
    u32::from_be_bytes([b0, b1, b2, b3])
}

/// Reads word `index` of a block.
///
/// # Panics
/// Panics if `index` is 16 or more; a block only holds 16 words.
#[inline(always)]
pub fn block_word(block: &Block, index: usize) -> u32 {
    assert!(
        index < WORDS_PER_BLOCK,
        "word index {index} out of range for a {BLOCK_LEN}-byte block"
    );

    let i = index * 4;

    bytes_to_u32(block[i], block[i + 1], block[i + 2], block[i + 3])
}
