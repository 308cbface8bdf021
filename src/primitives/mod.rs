//! Primitive types
//!
//! Simple, fixed-size building blocks with well-defined semantics. They do
//! not attempt to replicate full standard library abstractions or a
//! big-integer library.
//!
//! Current primitives:
//! - `U256`: a fixed-size 256-bit value, used for SHA-256 digests

mod u256;

pub use u256::U256;
