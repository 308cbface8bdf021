//! SHA-256 hash function
//!
//! Pure-Rust implementation of SHA-256 as defined in FIPS 180-4.
//!
//! The pipeline is split into small, separately testable stages:
//! - `constants`: derives the initial hash value and the round constants
//!   from the first 64 primes
//! - `padding`: appends the `1` bit, the zero run and the 64-bit length
//! - `parse`: splits the padded message into 512-bit blocks
//! - `computations`: message schedule, round functions and state folding
//! - `core`: ties the stages together
//!
//! The derived tables are computed once per process and shared read-only
//! by every caller.

use std::sync::LazyLock;

pub mod computations;
pub mod constants;
pub mod core;
pub mod padding;
pub mod parse;

/// Size of one message block in bytes (512 bits).
pub const BLOCK_LEN: usize = 64;

/// Size of the final digest in bytes (256 bits).
pub const DIGEST_LEN: usize = 32;

/// Size of the big-endian bit-length field closing the padding.
pub const LENGTH_FIELD_LEN: usize = 8;

/// A single 512-bit message block.
pub type Block = [u8; BLOCK_LEN];

/// Initial hash value H(0), FIPS 180-4 §5.3.3.
pub static H256_INIT: LazyLock<[u32; 8]> = LazyLock::new(constants::initial_hash_values);

/// Round constants K0..K63, FIPS 180-4 §4.2.2.
pub static K256: LazyLock<[u32; 64]> = LazyLock::new(constants::round_constants);
