// crates/hdlbits-core/src/convert.rs
//
// Explicit signed <-> unsigned reinterpretation of value[width-1:0].

use crate::error::{HdlError, Result};

#[inline]
fn check_width(width: u32) -> Result<()> {
    if width == 0 || width > 64 {
        return Err(HdlError::Range(format!(
            "conversion width must be in 1..=64, got {width}"
        )));
    }
    Ok(())
}

#[inline]
fn mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Interpret `value[width-1:0]` as unsigned. `to_unsigned(-1, 8) == 0xFF`.
pub fn to_unsigned(value: i64, width: u32) -> Result<u64> {
    check_width(width)?;
    Ok((value as u64) & mask(width))
}

/// Interpret `value[width-1:0]` as two's complement. `to_signed(0xFF, 8) == -1`.
pub fn to_signed(value: u64, width: u32) -> Result<i64> {
    check_width(width)?;
    let sh = 64 - width;
    Ok(((value << sh) as i64) >> sh)
}

/// Which part of a packed complex sample sits in the MSBs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComplexOrder {
    /// Imaginary in the MSBs, real in the LSBs.
    #[default]
    ImRe,
    /// Real in the MSBs, imaginary in the LSBs.
    ReIm,
}

/// Pack a complex sample into one `2 * width` bit word. Each part is masked to
/// `width` bits first, so out-of-range parts wrap.
pub fn concat_complex(re: i64, im: i64, width: u32, order: ComplexOrder) -> Result<u128> {
    let re = to_unsigned(re, width)? as u128;
    let im = to_unsigned(im, width)? as u128;
    Ok(match order {
        ComplexOrder::ImRe => (im << width) | re,
        ComplexOrder::ReIm => (re << width) | im,
    })
}

/// Split a `2 * width` bit word into its signed `(re, im)` parts.
pub fn unconcat_complex(packed: u128, width: u32, order: ComplexOrder) -> Result<(i64, i64)> {
    check_width(width)?;
    let lo = to_signed((packed & mask(width) as u128) as u64, width)?;
    let hi = to_signed(((packed >> width) & mask(width) as u128) as u64, width)?;
    Ok(match order {
        ComplexOrder::ImRe => (lo, hi),
        ComplexOrder::ReIm => (hi, lo),
    })
}
