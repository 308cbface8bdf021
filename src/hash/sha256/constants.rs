//! SHA-256 constant derivation
//!
//! FIPS 180-4 defines both constant tables in terms of the first 64 primes:
//! - the initial hash value H(0) holds the first 32 bits of the fractional
//!   parts of the square roots of primes 1..8
//! - the round constants K hold the first 32 bits of the fractional parts
//!   of the cube roots of primes 1..64
//!
//! This module derives both tables instead of embedding them. Roots are
//! evaluated in double precision and the fractional part is truncated,
//! never rounded, which reproduces the published tables bit for bit.

/// `2^32`, the fixed-point scale applied to the fractional part.
const FIXED_POINT_SCALE: f64 = 4_294_967_296.0;

/// Which root of a prime feeds a constant table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Root {
    /// Square root, used for the initial hash value.
    Square,
    /// Cube root, used for the round constants.
    Cube,
}

impl Root {
    /// Evaluates this root of `n` in double precision.
    pub fn of(self, n: u32) -> f64 {
        let n = f64::from(n);

        match self {
            Root::Square => n.sqrt(),
            Root::Cube => n.cbrt(),
        }
    }
}

/// Returns the first `count` primes in ascending order.
///
/// Each candidate is tested by trial division against the primes already
/// found; the first divisor moves the search on to the next candidate.
pub fn first_primes(count: usize) -> Vec<u32> {
    let mut primes: Vec<u32> = Vec::with_capacity(count);
    let mut candidate = 1u32;

    'search: while primes.len() < count {
        candidate += 1;

        for &p in &primes {
            if p * p > candidate {
                break;
            }

            if candidate % p == 0 {
                continue 'search;
            }
        }

        primes.push(candidate);
    }

    primes
}

/// Returns the `n`-th prime, counting from 1 (`nth_prime(1) == 2`).
///
/// # Panics
/// Panics if `n` is zero.
pub fn nth_prime(n: usize) -> u32 {
    assert!(n >= 1, "primes are 1-indexed, got n = 0");

    first_primes(n)[n - 1]
}

/// Scales the fractional part of `real` by `2^32` and truncates it.
///
/// Only the fractional part survives, so `fixed_point_fraction(1.5)` and
/// `fixed_point_fraction(7.5)` are both `0x8000_0000`.
pub fn fixed_point_fraction(real: f64) -> u32 {
    debug_assert!(real.is_finite() && real >= 0.0);

    // `as` truncates toward zero, which is exactly the FIPS extraction.
    (real.fract() * FIXED_POINT_SCALE) as u32
}

/// First 32 bits of the fractional part of the given root of `n`.
pub fn root_fraction(n: u32, root: Root) -> u32 {
    fixed_point_fraction(root.of(n))
}

/// Derives the initial hash value H(0) from primes 1..8.
pub fn initial_hash_values() -> [u32; 8] {
    let mut out = [0u32; 8];

    for (word, p) in out.iter_mut().zip(first_primes(8)) {
        *word = root_fraction(p, Root::Square);
    }

    out
}

/// Derives the 64 round constants from primes 1..64.
pub fn round_constants() -> [u32; 64] {
    let mut out = [0u32; 64];

    for (word, p) in out.iter_mut().zip(first_primes(64)) {
        *word = root_fraction(p, Root::Cube);
    }

    out
}
