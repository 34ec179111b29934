// crates/hdlbits-core/src/bits/mod.rs
//
// Bit-addressable unsigned container with HDL-style [high:low] slicing.
//
// Slices are always written most-significant index first, like a VHDL
// `downto` range. Reads return plain integers; writes mutate the container in
// place and never let `data` grow past `width` bits.

pub mod ops;
pub mod symbols;

use std::fmt;

use crate::error::{HdlError, Result};

pub use ops::{bit_len, invert_top_bit, mask, reverse_bits, reverse_byte, reverse_word};
pub use symbols::{symbol_range, Symbols};

/// Widest container that fits the native backing integer.
pub const MAX_WIDTH: u32 = u128::BITS;

/// Passed to [`Bits::set_range`] to set every bit of the range to 1.
///
/// This is the unsigned reading of `-1`; for any range narrower than 128 bits
/// it cannot be a real value, and for a full 128-bit range it already is all
/// ones.
pub const ALL_ONES: u128 = u128::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bits {
    data: u128,
    width: u32,
}

impl Bits {
    /// Wrap `data` in a container of `width` bits.
    ///
    /// With `width == None` the minimum bit length of `data` is used. An explicit
    /// width must be in `1..=128` and large enough to hold `data`; the value is
    /// never silently truncated.
    pub fn new(data: u128, width: Option<u32>) -> Result<Bits> {
        let width = match width {
            None => bit_len(data),
            Some(0) => {
                return Err(HdlError::Range("bit width must be positive".into()));
            }
            Some(w) if w > MAX_WIDTH => {
                return Err(HdlError::Range(format!(
                    "bit width {w} exceeds the {MAX_WIDTH}-bit maximum"
                )));
            }
            Some(w) => w,
        };
        if bit_len(data) > width {
            return Err(HdlError::Range(format!(
                "value 0x{data:x} does not fit in {width} bits"
            )));
        }
        Ok(Bits { data, width })
    }

    /// Like [`Bits::new`] for a signed source; negative values are refused.
    /// Use [`Bits::from_signed`] to store the two's complement pattern instead.
    pub fn from_int(value: i128, width: Option<u32>) -> Result<Bits> {
        if value < 0 {
            return Err(HdlError::Domain(format!(
                "bit containers hold unsigned data only, got {value}; convert with from_signed"
            )));
        }
        Bits::new(value as u128, width)
    }

    /// Store the `width`-bit two's complement pattern of `value`.
    /// Fails if `value` is not representable in `width` signed bits.
    pub fn from_signed(value: i64, width: u32) -> Result<Bits> {
        if width == 0 || width > MAX_WIDTH {
            return Err(HdlError::Range(format!(
                "bit width must be in 1..={MAX_WIDTH}, got {width}"
            )));
        }
        if width < 64 {
            let lo = -(1i64 << (width - 1));
            let hi = (1i64 << (width - 1)) - 1;
            if value < lo || value > hi {
                return Err(HdlError::Range(format!(
                    "value {value} does not fit in {width} signed bits"
                )));
            }
        }
        Bits::new((value as i128 as u128) & mask(width), Some(width))
    }

    pub fn data(&self) -> u128 {
        self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    fn check_index(&self, index: u32) -> Result<()> {
        if index >= self.width {
            return Err(HdlError::Range(format!(
                "bit {index} does not exist in {} bits",
                self.width
            )));
        }
        Ok(())
    }

    fn check_range(&self, high: u32, low: u32) -> Result<()> {
        if high < low {
            return Err(HdlError::Range(format!(
                "slice [{high}:{low}] must be given as [high:low]"
            )));
        }
        self.check_index(high)
    }

    /// Read bit `index`; returns 0 or 1.
    pub fn get_bit(&self, index: u32) -> Result<u8> {
        self.check_index(index)?;
        Ok(((self.data >> index) & 1) as u8)
    }

    /// Read bits `[high:low]` as an unsigned integer.
    pub fn get_range(&self, high: u32, low: u32) -> Result<u128> {
        self.check_range(high, low)?;
        Ok((self.data >> low) & mask(high - low + 1))
    }

    /// Write bit `index`. Only 0 and 1 are accepted.
    pub fn set_bit(&mut self, index: u32, bit: u128) -> Result<()> {
        self.check_index(index)?;
        if bit > 1 {
            return Err(HdlError::Range(format!(
                "value {bit} does not fit in bit [{index}]"
            )));
        }
        self.data = (self.data & !(1u128 << index)) | (bit << index);
        Ok(())
    }

    /// Write bits `[high:low]`, leaving all other bits untouched.
    ///
    /// `value` must fit in `high - low + 1` bits, except for [`ALL_ONES`] which
    /// fills the range with ones.
    pub fn set_range(&mut self, high: u32, low: u32, value: u128) -> Result<()> {
        self.check_range(high, low)?;
        let m = mask(high - low + 1);
        let v = if value == ALL_ONES { m } else { value };
        if v > m {
            return Err(HdlError::Range(format!(
                "value 0x{value:x} does not fit in bits [{high}:{low}]"
            )));
        }
        self.data = (self.data & !(m << low)) | (v << low);
        Ok(())
    }

    /// Concatenate `self` (MS part) with `low` (LS part), like `a & b` in VHDL.
    pub fn concat(&self, low: &Bits) -> Result<Bits> {
        let width = self.width + low.width;
        if width > MAX_WIDTH {
            return Err(HdlError::Range(format!(
                "concatenation of {} and {} bits exceeds {MAX_WIDTH} bits",
                self.width, low.width
            )));
        }
        let mut out = Bits::new(0, Some(width))?;
        out.set_range(width - 1, low.width, self.data)?;
        out.set_range(low.width - 1, 0, low.data)?;
        Ok(out)
    }

    /// All `width` bits in reverse order.
    pub fn bit_reverse(&self) -> u128 {
        reverse_bits(self.data, self.width)
    }

    /// Indices of the bits that are 1, lowest first.
    pub fn high_bit_positions(&self) -> Vec<u32> {
        (0..self.width)
            .filter(|&i| (self.data >> i) & 1 == 1)
            .collect()
    }

    /// Indices of the bits that are 0, lowest first.
    pub fn low_bit_positions(&self) -> Vec<u32> {
        (0..self.width)
            .filter(|&i| (self.data >> i) & 1 == 0)
            .collect()
    }
}

/// Concatenate two containers; `high` becomes the most significant segment.
pub fn concatenate(high: &Bits, low: &Bits) -> Result<Bits> {
    high.concat(low)
}

impl From<Bits> for u128 {
    fn from(b: Bits) -> u128 {
        b.data
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.data)
    }
}

impl fmt::LowerHex for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.data, f)
    }
}

impl fmt::UpperHex for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.data, f)
    }
}

/// Zero-padded to the full width: `{:b}` of a 6-bit 0b101 is `000101`.
impl fmt::Binary for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0w$b}", self.data, w = self.width as usize)
    }
}
