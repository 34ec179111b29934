// crates/hdlbits-cli/src/cmd/bits.rs

use clap::Args;
use hdlbits_core::bits::ALL_ONES;
use hdlbits_core::{Bits, Symbols};

use crate::io::values::{parse_i64_any, parse_u128_any};

#[derive(Args, Debug)]
pub struct BitsArgs {
    /// Field value (decimal, 0x hex or 0b binary; negative needs --width)
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Field width in bits (default: minimal width of the value)
    #[arg(long)]
    pub width: Option<u32>,

    /// Append a less significant part, "VALUE[:WIDTH]" (repeatable)
    #[arg(long)]
    pub concat: Vec<String>,

    /// Index --get/--set by symbols of this many bits; the field is padded to whole symbols
    #[arg(long)]
    pub symbol_width: Option<u32>,

    /// Write a slice before reading, "H[:L]=VALUE"; VALUE -1 (or "ones") sets every bit (repeatable)
    #[arg(long)]
    pub set: Vec<String>,

    /// Read a slice, "H[:L]" (repeatable)
    #[arg(long, visible_alias = "slice")]
    pub get: Vec<String>,

    /// Print the bit-reversed value
    #[arg(long)]
    pub reverse: bool,

    /// Print the positions of 1 and 0 bits
    #[arg(long)]
    pub positions: bool,
}

/// The field as addressed on the command line: by bit or by symbol.
enum Field {
    Bits(Bits),
    Symbols(Symbols),
}

impl Field {
    fn get(&self, h: u32, l: u32) -> anyhow::Result<u128> {
        Ok(match self {
            Field::Bits(b) => b.get_range(h, l)?,
            Field::Symbols(s) => s.get_symbols(h, l)?,
        })
    }

    fn set(&mut self, h: u32, l: u32, value: u128) -> anyhow::Result<()> {
        match self {
            Field::Bits(b) => b.set_range(h, l, value)?,
            Field::Symbols(s) => s.set_symbols(h, l, value)?,
        }
        Ok(())
    }

    fn bits(&self) -> Bits {
        match self {
            Field::Bits(b) => *b,
            Field::Symbols(s) => s.into_bits(),
        }
    }
}

pub fn run(a: BitsArgs) -> anyhow::Result<()> {
    let mut bits = parse_field(&a.value, a.width)?;

    for part in &a.concat {
        let (v, w) = match part.split_once(':') {
            Some((v, w)) => (v, Some(w.trim().parse::<u32>()?)),
            None => (part.as_str(), None),
        };
        bits = bits.concat(&parse_field(v, w)?)?;
    }

    let mut field = match a.symbol_width {
        Some(sw) if sw == 0 => anyhow::bail!("--symbol-width must be positive"),
        Some(sw) => Field::Symbols(Symbols::new(
            bits.data(),
            sw,
            Some(bits.width().div_ceil(sw)),
        )?),
        None => Field::Bits(bits),
    };

    for s in &a.set {
        let (slice, value) = s
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("--set expects H[:L]=VALUE, got {s:?}"))?;
        let (h, l) = parse_slice(slice)?;
        log::debug!("set [{h}:{l}] = {value}");
        field.set(h, l, parse_fill_value(value)?)?;
    }

    let bits = field.bits();
    println!("value    = {bits}");
    println!("width    = {}", bits.width());
    println!("bin      = {bits:b}");

    for s in &a.get {
        let (h, l) = parse_slice(s)?;
        println!("get[{}] = 0x{:x}", s.trim(), field.get(h, l)?);
    }

    if a.reverse {
        println!("reverse  = 0x{:x}", bits.bit_reverse());
    }

    if a.positions {
        println!("ones     = {:?}", bits.high_bit_positions());
        println!("zeros    = {:?}", bits.low_bit_positions());
    }
    Ok(())
}

fn parse_field(s: &str, width: Option<u32>) -> anyhow::Result<Bits> {
    if s.trim().starts_with('-') {
        let w = width.ok_or_else(|| anyhow::anyhow!("negative value {s} needs an explicit width"))?;
        return Ok(Bits::from_signed(parse_i64_any(s)?, w)?);
    }
    Ok(Bits::new(parse_u128_any(s)?, width)?)
}

/// Slice write value; `-1` and `ones` fill the slice with ones.
fn parse_fill_value(s: &str) -> anyhow::Result<u128> {
    match s.trim() {
        "-1" | "ones" => Ok(ALL_ONES),
        other => parse_u128_any(other),
    }
}

fn parse_slice(s: &str) -> anyhow::Result<(u32, u32)> {
    match s.split_once(':') {
        Some((h, l)) => Ok((h.trim().parse()?, l.trim().parse()?)),
        None => {
            let i = s.trim().parse()?;
            Ok((i, i))
        }
    }
}
