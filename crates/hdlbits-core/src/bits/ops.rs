// crates/hdlbits-core/src/bits/ops.rs

use crate::bits::MAX_WIDTH;

/// Minimum number of bits needed to hold `value`. Zero still takes one bit.
#[inline]
pub fn bit_len(value: u128) -> u32 {
    (u128::BITS - value.leading_zeros()).max(1)
}

/// All-ones mask of `nof_bits` bits, saturating at 128.
#[inline]
pub fn mask(nof_bits: u32) -> u128 {
    if nof_bits >= MAX_WIDTH {
        u128::MAX
    } else {
        (1u128 << nof_bits) - 1
    }
}

/// Reverse the order of the low `width` bits of `value`, e.g. for an FFT
/// index bit flip. Bits above `width` are ignored.
pub fn reverse_bits(value: u128, width: u32) -> u128 {
    if width == 0 {
        return 0;
    }
    let width = width.min(MAX_WIDTH);
    (value & mask(width)).reverse_bits() >> (MAX_WIDTH - width)
}

/// Bit-reverse a byte.
#[inline]
pub fn reverse_byte(byte: u8) -> u8 {
    reverse_bits(byte as u128, 8) as u8
}

/// Bit-reverse a 32-bit word: byte order swapped and each byte reversed.
#[inline]
pub fn reverse_word(word: u32) -> u32 {
    reverse_bits(word as u128, 32) as u32
}

/// Invert the MSB of `value[width-1:0]`, e.g. for an index fftshift.
pub fn invert_top_bit(value: u128, width: u32) -> u128 {
    if width == 0 {
        return 0;
    }
    let width = width.min(MAX_WIDTH);
    (value & mask(width)) ^ (1u128 << (width - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_len_matches_binary_repr() {
        assert_eq!(bit_len(0), 1);
        assert_eq!(bit_len(1), 1);
        assert_eq!(bit_len(2), 2);
        assert_eq!(bit_len(0xFF), 8);
        assert_eq!(bit_len(0x100), 9);
        assert_eq!(bit_len(u128::MAX), 128);
    }

    #[test]
    fn fft_index_helpers() {
        // 3-bit bit-reversed order
        let order: Vec<u128> = (0..8).map(|i| reverse_bits(i, 3)).collect();
        assert_eq!(order, vec![0, 4, 2, 6, 1, 5, 3, 7]);

        // fftshift of an 8-point index
        let shifted: Vec<u128> = (0..8).map(|i| invert_top_bit(i, 3)).collect();
        assert_eq!(shifted, vec![4, 5, 6, 7, 0, 1, 2, 3]);
        assert_eq!(invert_top_bit(0xF3, 4), 0xB);
    }

    #[test]
    fn byte_and_word_reversal() {
        assert_eq!(reverse_byte(0x01), 0x80);
        assert_eq!(reverse_byte(0xB0), 0x0D);
        assert_eq!(reverse_word(0x0000_0001), 0x8000_0000);
        assert_eq!(reverse_word(0x1234_5678), 0x1E6A_2C48);
        for b in 0..=255u8 {
            assert_eq!(reverse_byte(reverse_byte(b)), b);
        }
    }
}
