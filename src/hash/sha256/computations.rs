//! SHA-256 round computations
//!
//! The six logical functions of FIPS 180-4 §4.1.2, the message schedule
//! expansion and the 64-round mixing of a block into the hash state.

use super::parse::{WORDS_PER_BLOCK, block_word};
use super::{Block, K256};

/// Number of rounds, and of words in the message schedule.
pub const ROUNDS: usize = 64;

#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// Choice: each bit of `e` picks the bit from `f` (1) or `g` (0).
#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ ((!e) & g)
}

/// Majority: each output bit is the value held by at least two inputs.
#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Expands a block into the 64-word message schedule.
///
/// Words 0..16 are the block itself, read big-endian. Every later word is
/// `σ1(w[t-2]) + w[t-7] + σ0(w[t-15]) + w[t-16]` modulo 2^32.
pub fn message_schedule(block: &Block) -> [u32; ROUNDS] {
    let mut w = [0u32; ROUNDS];

    for (t, slot) in w.iter_mut().enumerate().take(WORDS_PER_BLOCK) {
        *slot = block_word(block, t);
    }

    for t in WORDS_PER_BLOCK..ROUNDS {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    w
}

/// Runs the 64 rounds over a copy of `state` and folds the result back in.
#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut [u32; 8], w: &[u32; ROUNDS]) {
    let k: &[u32; ROUNDS] = &K256;

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    for (&wi, &ki) in w.iter().zip(k.iter()) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(ki)
            .wrapping_add(wi);

        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    fold(state, [a, b, c, d, e, f, g, h]);
}

/// Unrolled variant: eight rounds per step, renaming the working variables
/// instead of shifting them.
#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut [u32; 8], w: &[u32; ROUNDS]) {
    let k: &[u32; ROUNDS] = &K256;

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    // One round writes only `d` and `h`; the caller rotates the names.
    macro_rules! round {
        ($a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $f:ident, $g:ident, $h:ident, $t:expr) => {{
            let t1 = $h
                .wrapping_add(big_sigma1($e))
                .wrapping_add(ch($e, $f, $g))
                .wrapping_add(k[$t])
                .wrapping_add(w[$t]);

            let t2 = big_sigma0($a).wrapping_add(maj($a, $b, $c));

            $d = $d.wrapping_add(t1);
            $h = t1.wrapping_add(t2);
        }};
    }

    for t in (0..ROUNDS).step_by(8) {
        round!(a, b, c, d, e, f, g, h, t);
        round!(h, a, b, c, d, e, f, g, t + 1);
        round!(g, h, a, b, c, d, e, f, t + 2);
        round!(f, g, h, a, b, c, d, e, t + 3);
        round!(e, f, g, h, a, b, c, d, t + 4);
        round!(d, e, f, g, h, a, b, c, t + 5);
        round!(c, d, e, f, g, h, a, b, t + 6);
        round!(b, c, d, e, f, g, h, a, t + 7);
    }

    fold(state, [a, b, c, d, e, f, g, h]);
}

/// Adds the working variables into the hash state, word by word.
#[inline(always)]
fn fold(state: &mut [u32; 8], working: [u32; 8]) {
    for (s, v) in state.iter_mut().zip(working) {
        *s = s.wrapping_add(v);
    }
}
