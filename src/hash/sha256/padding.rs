//! SHA-256 message padding (FIPS 180-4 §5.1.1)
//!
//! A message of `l` bits is extended with a single `1` bit, `k` zero bits
//! and the 64-bit big-endian encoding of `l`, so that the padded length is
//! a multiple of 512 bits.
//!
//! For byte-aligned messages the `1` bit and the first seven zero bits
//! share the `0x80` byte, and every remaining zero bit comes in whole
//! bytes.

use super::{BLOCK_LEN, LENGTH_FIELD_LEN};

/// Bits in one block.
const BLOCK_BITS: u64 = (BLOCK_LEN as u64) * 8;

/// Offset within a block where the length field starts.
const LENGTH_OFFSET_BITS: u64 = BLOCK_BITS - (LENGTH_FIELD_LEN as u64) * 8;

/// Number of zero bits between the `1` marker and the length field.
///
/// `consumed` is the number of bits occupied in the final partial block
/// once the marker is appended. Below 448 the zeros fill the block up to
/// the length field; from 448 on the length field no longer fits and the
/// zeros run to 448 bits into an extra block (`960 - consumed`).
///
/// # Panics
/// Panics if the resulting padded length is not a multiple of 512 bits.
/// That can only happen through a defect in this function, never through
/// the input.
pub fn zero_padding_bits(message_bits: u64) -> u64 {
    let consumed = (message_bits % BLOCK_BITS + 1) % BLOCK_BITS;

    let zeros = if consumed < LENGTH_OFFSET_BITS {
        LENGTH_OFFSET_BITS - consumed
    } else {
        BLOCK_BITS + LENGTH_OFFSET_BITS - consumed
    };

    let padded_bits = u128::from(message_bits) + 1 + u128::from(zeros) + 64;

    assert!(
        padded_bits % u128::from(BLOCK_BITS) == 0,
        "padded message is {padded_bits} bits long, which is not a multiple of {BLOCK_BITS}"
    );

    zeros
}

/// Number of whole zero bytes following the `0x80` marker byte.
fn zero_padding_bytes(message_len: usize) -> usize {
    // Seven of the zero bits live in the marker byte itself.
    (zero_padding_bits((message_len as u64) << 3) / 8) as usize
}

/// Length in bytes of the padded form of a `message_len`-byte message.
pub fn padded_len(message_len: usize) -> usize {
    message_len + 1 + zero_padding_bytes(message_len) + LENGTH_FIELD_LEN
}

/// Returns the padded copy of `message`.
///
/// The output is `message || 0x80 || 0x00* || bit_len` where `bit_len` is
/// the 64-bit big-endian length of the original message in bits. Its
/// length is always a non-zero multiple of 64 bytes.
pub fn pad_message(message: &[u8]) -> Vec<u8> {
    let bit_len = (message.len() as u64) << 3;
    let zeros = zero_padding_bytes(message.len());

    let mut padded = Vec::with_capacity(message.len() + 1 + zeros + LENGTH_FIELD_LEN);

    padded.extend_from_slice(message);
    padded.push(0x80);
    padded.resize(padded.len() + zeros, 0x00);
    padded.extend_from_slice(&bit_len.to_be_bytes());

    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length_field(message: &[u8]) -> [u8; 8] {
        ((message.len() as u64) * 8).to_be_bytes()
    }

    #[test]
    fn short_message_layout() {
        let padded = pad_message(b"Hello");

        let mut expected = b"Hello".to_vec();
        expected.push(0x80);
        expected.extend_from_slice(&[0u8; 50]);
        expected.extend_from_slice(&length_field(b"Hello"));

        assert_eq!(padded.len(), 64);
        assert_eq!(padded, expected);
    }

    #[test]
    fn another_short_message_layout() {
        let message = b"Another message";
        let padded = pad_message(message);

        assert_eq!(padded.len(), 64);
        assert_eq!(&padded[..15], message);
        assert_eq!(padded[15], 0x80);
        assert!(padded[16..56].iter().all(|&b| b == 0));
        assert_eq!(padded[56..], length_field(message));
    }

    #[test]
    fn empty_message() {
        let padded = pad_message(&[]);

        assert_eq!(padded.len(), 64);
        assert_eq!(padded[0], 0x80);
        assert!(padded[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn zero_bits_known_lengths() {
        assert_eq!(zero_padding_bits(3 * 8), 423);
        assert_eq!(zero_padding_bits(1000 * 8), 127);
        assert_eq!(zero_padding_bits(0), 447);
    }

    #[test]
    fn zero_bits_switch_at_448_consumed() {
        // consumed = message bits + 1
        assert_eq!(zero_padding_bits(446), 1); // consumed 447
        assert_eq!(zero_padding_bits(447), 512); // consumed 448
        assert_eq!(zero_padding_bits(448), 511); // consumed 449

        // Same boundary one block further in.
        assert_eq!(zero_padding_bits(512 + 446), 1);
        assert_eq!(zero_padding_bits(512 + 447), 512);
        assert_eq!(zero_padding_bits(512 + 448), 511);
    }

    #[test]
    fn zero_bits_full_block_of_message() {
        // consumed wraps to 1 when the message fills whole blocks
        assert_eq!(zero_padding_bits(511), 448);
        assert_eq!(zero_padding_bits(512), 447);
    }

    #[test]
    fn padded_bits_are_block_multiples() {
        for bits in 0..2048u64 {
            let total = bits + 1 + zero_padding_bits(bits) + 64;
            assert_eq!(total % 512, 0, "message of {bits} bits");
        }
    }

    #[test]
    fn spill_into_second_block() {
        assert_eq!(padded_len(55), 64);
        assert_eq!(padded_len(56), 128);
        assert_eq!(padded_len(63), 128);
        assert_eq!(padded_len(64), 128);
        assert_eq!(padded_len(119), 128);
        assert_eq!(padded_len(120), 192);
    }

    #[test]
    fn pad_message_matches_padded_len() {
        for len in 0..300 {
            let message = vec![0xA5u8; len];
            let padded = pad_message(&message);

            assert_eq!(padded.len(), padded_len(len));
            assert_eq!(padded.len() % BLOCK_LEN, 0);
            assert!(padded.len() >= len + 9);
            assert!(padded.len() < len + 9 + BLOCK_LEN);
            assert_eq!(&padded[..len], &message[..]);
            assert_eq!(padded[len], 0x80);
            assert_eq!(padded[padded.len() - 8..], length_field(&message));
        }
    }
}
