// crates/hdlbits-core/src/bits/symbols.rs

use std::fmt;

use crate::bits::{bit_len, Bits};
use crate::error::{HdlError, Result};

pub const BYTE_W: u32 = 8;
pub const HALFWORD_W: u32 = 16;
pub const WORD_W: u32 = 32;
pub const DOUBLEWORD_W: u32 = 64;

/// Bit range `[high:low]` covered by symbols `[high_symbol:low_symbol]`.
///
/// Symbol `s` occupies bits `[(s+1)*symbol_width-1 : s*symbol_width]`.
pub fn symbol_range(high_symbol: u32, low_symbol: u32, symbol_width: u32) -> Result<(u32, u32)> {
    if symbol_width == 0 {
        return Err(HdlError::Range("symbol width must be positive".into()));
    }
    if high_symbol < low_symbol {
        return Err(HdlError::Range(format!(
            "symbol slice [{high_symbol}:{low_symbol}] must be given as [high:low]"
        )));
    }
    let high = high_symbol
        .checked_add(1)
        .and_then(|n| n.checked_mul(symbol_width))
        .map(|b| b - 1)
        .ok_or_else(|| HdlError::Range(format!("symbol {high_symbol} out of range")))?;
    let low = low_symbol
        .checked_mul(symbol_width)
        .ok_or_else(|| HdlError::Range(format!("symbol {low_symbol} out of range")))?;
    Ok((high, low))
}

/// A [`Bits`] container indexed by fixed-width symbols instead of bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symbols {
    bits: Bits,
    symbol_width: u32,
}

impl Symbols {
    /// View `data` as `symbol_count` symbols of `symbol_width` bits.
    ///
    /// With `symbol_count == None` the count is the smallest number of whole
    /// symbols that holds `data`.
    pub fn new(data: u128, symbol_width: u32, symbol_count: Option<u32>) -> Result<Symbols> {
        if symbol_width == 0 {
            return Err(HdlError::Range("symbol width must be positive".into()));
        }
        let count = match symbol_count {
            Some(0) => {
                return Err(HdlError::Range("symbol count must be positive".into()));
            }
            Some(n) => n,
            None => bit_len(data).div_ceil(symbol_width),
        };
        let width = count.checked_mul(symbol_width).ok_or_else(|| {
            HdlError::Range(format!("{count} symbols of {symbol_width} bits overflow"))
        })?;
        Ok(Symbols {
            bits: Bits::new(data, Some(width))?,
            symbol_width,
        })
    }

    pub fn bytes(data: u128, count: Option<u32>) -> Result<Symbols> {
        Symbols::new(data, BYTE_W, count)
    }

    pub fn halfwords(data: u128, count: Option<u32>) -> Result<Symbols> {
        Symbols::new(data, HALFWORD_W, count)
    }

    pub fn words(data: u128, count: Option<u32>) -> Result<Symbols> {
        Symbols::new(data, WORD_W, count)
    }

    pub fn doublewords(data: u128, count: Option<u32>) -> Result<Symbols> {
        Symbols::new(data, DOUBLEWORD_W, count)
    }

    pub fn symbol_width(&self) -> u32 {
        self.symbol_width
    }

    pub fn symbol_count(&self) -> u32 {
        self.bits.width().div_ceil(self.symbol_width)
    }

    pub fn data(&self) -> u128 {
        self.bits.data()
    }

    pub fn width(&self) -> u32 {
        self.bits.width()
    }

    pub fn as_bits(&self) -> &Bits {
        &self.bits
    }

    pub fn into_bits(self) -> Bits {
        self.bits
    }

    pub fn get_symbol(&self, index: u32) -> Result<u128> {
        self.get_symbols(index, index)
    }

    pub fn get_symbols(&self, high: u32, low: u32) -> Result<u128> {
        let (h, l) = symbol_range(high, low, self.symbol_width)?;
        self.bits.get_range(h, l)
    }

    pub fn set_symbol(&mut self, index: u32, value: u128) -> Result<()> {
        self.set_symbols(index, index, value)
    }

    /// Write symbols `[high:low]`; [`crate::bits::ALL_ONES`] fills them with ones.
    pub fn set_symbols(&mut self, high: u32, low: u32, value: u128) -> Result<()> {
        let (h, l) = symbol_range(high, low, self.symbol_width)?;
        self.bits.set_range(h, l, value)
    }
}

impl fmt::Display for Symbols {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.bits, f)
    }
}
