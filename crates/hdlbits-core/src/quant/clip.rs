// crates/hdlbits-core/src/quant/clip.rs

/// Largest value representable in `width` bits two's complement: `2^(width-1) - 1`.
///
/// Width 0 yields 0, widths >= 64 yield `i64::MAX`.
#[inline]
pub fn signed_max(width: u32) -> i64 {
    match width {
        0 => 0,
        1..=63 => (1i64 << (width - 1)) - 1,
        _ => i64::MAX,
    }
}

/// Smallest value representable in `width` bits two's complement: `-2^(width-1)`.
///
/// Width 0 yields 0, widths >= 64 yield `i64::MIN`.
#[inline]
pub fn signed_min(width: u32) -> i64 {
    match width {
        0 => 0,
        1..=63 => -(1i64 << (width - 1)),
        _ => i64::MIN,
    }
}

/// Saturate `value` to `width` bits.
///
/// The upper bound is always `2^(width-1) - 1`. The lower bound is
/// `-2^(width-1)`, or `-2^(width-1) + 1` when `symmetric` is set, so that the
/// output never holds the most negative code.
pub fn clip(value: i64, width: u32, symmetric: bool) -> i64 {
    if width == 0 {
        return 0;
    }
    if width > 64 {
        return value;
    }
    let high = signed_max(width);
    let low = if symmetric {
        signed_min(width) + 1
    } else {
        signed_min(width)
    };
    value.clamp(low, high)
}

/// Wrap `value` to `width` bits: keep the `width` LSBs and reinterpret them as
/// two's complement. This is what an HDL assignment to a narrower signed
/// vector does.
pub fn wrap(value: i64, width: u32) -> i64 {
    if width == 0 {
        return 0;
    }
    if width >= 64 {
        return value;
    }
    // sign-extend from bit width-1
    let sh = 64 - width;
    (value << sh) >> sh
}
