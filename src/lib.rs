//! SHA-256 for Cryptal
//!
//! A pure-Rust SHA-256 (FIPS 180-4) whose constant tables are derived at
//! runtime from the first 64 primes instead of being embedded.
//!
//! The focus is on **clarity, predictability, and auditability**: each
//! stage of the hash (constant derivation, padding, block parsing,
//! compression, digest assembly) is a separate, public, testable function.
//!
//! # Module overview
//!
//! - `hash`
//!   The SHA-256 pipeline. `hash::sha256` hashes a complete message in one
//!   call and returns its digest as a [`U256`](primitives::U256);
//!   `hash::digest` returns the same digest as raw bytes.
//!
//! - `primitives`
//!   The `U256` value type carrying digests, with big-endian conversions
//!   and hexadecimal formatting.
//!
//! # Example
//!
//! ```
//! use cryptal_sha256::hash::sha256;
//!
//! let d = sha256(b"abc");
//! assert_eq!(
//!     d.to_string(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! # Design goals
//!
//! - One-shot hashing: the whole message is available up front
//! - Process-wide constant tables, derived once and shared read-only
//! - Invariant violations abort loudly instead of producing a wrong digest

pub mod hash;
pub mod primitives;
