// crates/hdlbits-core/tests/bits_slicing.rs

use hdlbits_core::bits::{mask, ALL_ONES};
use hdlbits_core::{concatenate, Bits, HdlError, Symbols};
use proptest::prelude::*;

fn lcg_next(x: &mut u64) -> u64 {
    // deterministic, not crypto
    *x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
    *x
}

fn container_and_range() -> impl Strategy<Value = (u32, u128, u32, u32)> {
    (1u32..=128)
        .prop_flat_map(|w| (Just(w), any::<u128>().prop_map(move |d| d & mask(w)), 0..w))
        .prop_flat_map(|(w, d, h)| (Just(w), Just(d), Just(h), 0..=h))
}

proptest! {
    #[test]
    fn set_then_get_roundtrips((w, d, h, l) in container_and_range(), x in any::<u128>()) {
        let n = h - l + 1;
        let x = x & mask(n);
        let mut b = Bits::new(d, Some(w)).unwrap();
        b.set_range(h, l, x).unwrap();
        prop_assert_eq!(b.get_range(h, l).unwrap(), x);

        // bits outside [h:l] untouched
        let outside = mask(w) & !(mask(n) << l);
        prop_assert_eq!(b.data() & outside, d & outside);
        prop_assert_eq!(b.width(), w);
    }

    #[test]
    fn reverse_twice_is_identity((w, d, _h, _l) in container_and_range()) {
        let b = Bits::new(d, Some(w)).unwrap();
        let r = Bits::new(b.bit_reverse(), Some(w)).unwrap();
        prop_assert_eq!(r.bit_reverse(), d);
    }

    #[test]
    fn positions_partition_the_width((w, d, _h, _l) in container_and_range()) {
        let b = Bits::new(d, Some(w)).unwrap();
        let hi = b.high_bit_positions();
        let lo = b.low_bit_positions();
        prop_assert_eq!(hi.len() + lo.len(), w as usize);
        prop_assert_eq!(hi.len() as u32, d.count_ones());
    }
}

#[test]
fn concatenate_dead_beef() {
    let a = Bits::new(0xDEAD, Some(16)).unwrap();
    let b = Bits::new(0xBEEF, Some(16)).unwrap();
    let c = concatenate(&a, &b).unwrap();
    assert_eq!(c.width(), 32);
    assert_eq!(c.data(), 0xDEADBEEF);
}

#[test]
fn concatenate_keeps_leading_zeroes_of_low_part() {
    let a = Bits::new(0x1, Some(4)).unwrap();
    let b = Bits::new(0x1, Some(8)).unwrap();
    let c = concatenate(&a, &b).unwrap();
    assert_eq!(c.width(), 12);
    assert_eq!(c.data(), 0x101);
}

#[test]
fn reverse_single_lsb() {
    let b = Bits::new(0b0000_0001, Some(8)).unwrap();
    assert_eq!(b.bit_reverse(), 128);
}

#[test]
fn construction_rejects_overflow() {
    assert!(matches!(Bits::new(256, Some(8)), Err(HdlError::Range(_))));
    assert!(matches!(Bits::new(1, Some(0)), Err(HdlError::Range(_))));
    assert!(matches!(Bits::new(1, Some(129)), Err(HdlError::Range(_))));
    assert!(Bits::new(255, Some(8)).is_ok());
}

#[test]
fn failed_writes_leave_data_unchanged() {
    let mut b = Bits::new(0xA5, Some(8)).unwrap();
    assert!(b.set_range(3, 0, 0x1F).is_err());
    assert!(b.set_range(0, 3, 0x1).is_err());
    assert!(b.set_range(8, 0, 0x1).is_err());
    assert!(b.set_bit(8, 1).is_err());
    assert_eq!(b.data(), 0xA5);

    b.set_range(7, 0, ALL_ONES).unwrap();
    assert_eq!(b.data(), 0xFF);
}

#[test]
fn random_bit_writes_match_mask_model() {
    let mut seed: u64 = 0x1234_5678_9abc_def0;
    let mut b = Bits::new(0, Some(96)).unwrap();
    let mut model: u128 = 0;

    for _ in 0..5000 {
        let i = (lcg_next(&mut seed) >> 32) as u32 % 96;
        let bit = (lcg_next(&mut seed) >> 63) as u128;
        b.set_bit(i, bit).unwrap();
        model = (model & !(1u128 << i)) | (bit << i);
        assert_eq!(b.data(), model);
        assert_eq!(b.get_bit(i).unwrap() as u128, bit);
    }
}

#[test]
fn symbol_views_share_bit_semantics() {
    let data = 0x0123_4567_89AB_CDEFu128;
    let bytes = Symbols::bytes(data, Some(8)).unwrap();
    let words = Symbols::words(data, Some(2)).unwrap();
    let bits = Bits::new(data, Some(64)).unwrap();

    for s in 0..8 {
        let (h, l) = (s * 8 + 7, s * 8);
        assert_eq!(bytes.get_symbol(s).unwrap(), bits.get_range(h, l).unwrap());
    }
    assert_eq!(words.get_symbol(1).unwrap(), 0x0123_4567);
    assert_eq!(bytes.get_symbols(7, 4).unwrap(), words.get_symbol(1).unwrap());
    assert_eq!(bytes.as_bits(), &bits);
    assert!(matches!(bytes.get_symbols(0, 1), Err(HdlError::Range(_))));
}
