// crates/hdlbits-cli/src/cmd/quant.rs

use clap::Args;
use hdlbits_core::convert::{to_signed, to_unsigned};
use hdlbits_core::quant::{clip, round, truncate, unsigned_round, wrap, RoundDirection};

use crate::io::values::{finish, fingerprint, read_values, write_values, ValueIo};

#[derive(Args, Debug)]
pub struct ClipArgs {
    /// Output width in bits
    #[arg(long)]
    pub width: u32,

    /// Exclude the most negative code (-2^(w-1))
    #[arg(long)]
    pub symmetric: bool,

    #[command(flatten)]
    pub io: ValueIo,
}

#[derive(Args, Debug)]
pub struct WrapArgs {
    /// Output width in bits
    #[arg(long)]
    pub width: u32,

    #[command(flatten)]
    pub io: ValueIo,
}

#[derive(Args, Debug)]
pub struct RoundArgs {
    /// Number of LSBs to round away
    #[arg(long)]
    pub lsb: u32,

    /// HALF_UP | HALF_AWAY | HALF_EVEN (default HALF_AWAY, HALF_UP with --unsigned)
    #[arg(long)]
    pub direction: Option<String>,

    /// Limit rounding growth to the signed max of this output width
    #[arg(long)]
    pub clip_width: Option<u32>,

    /// Inputs are unsigned; negative values are rejected
    #[arg(long)]
    pub unsigned: bool,

    #[command(flatten)]
    pub io: ValueIo,
}

#[derive(Args, Debug)]
pub struct TruncateArgs {
    /// Number of LSBs to truncate
    #[arg(long)]
    pub lsb: u32,

    /// Round toward zero instead of toward -infinity
    #[arg(long)]
    pub symmetric: bool,

    #[command(flatten)]
    pub io: ValueIo,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Width of the field value[w-1:0] (1..=64)
    #[arg(long)]
    pub width: u32,

    #[command(flatten)]
    pub io: ValueIo,
}

pub fn run_clip(a: ClipArgs) -> anyhow::Result<()> {
    log::debug!("clip width={} symmetric={}", a.width, a.symmetric);
    let values = read_values(&a.io)?;
    let out: Vec<i64> = values.iter().map(|&v| clip(v, a.width, a.symmetric)).collect();

    let saturated = values.iter().zip(&out).filter(|(v, o)| v != o).count();
    if saturated > 0 {
        log::info!("clip: {saturated} of {} values saturated", values.len());
    }
    finish(&a.io, "clip", &out)
}

pub fn run_wrap(a: WrapArgs) -> anyhow::Result<()> {
    log::debug!("wrap width={}", a.width);
    let values = read_values(&a.io)?;
    let out: Vec<i64> = values.iter().map(|&v| wrap(v, a.width)).collect();
    finish(&a.io, "wrap", &out)
}

pub fn run_round(a: RoundArgs) -> anyhow::Result<()> {
    let direction = match &a.direction {
        Some(s) => RoundDirection::parse(s)?,
        None if a.unsigned => RoundDirection::HalfUp,
        None => RoundDirection::HalfAway,
    };
    log::debug!(
        "round lsb={} direction={} clip_width={:?} unsigned={}",
        a.lsb,
        direction,
        a.clip_width,
        a.unsigned
    );

    let values = read_values(&a.io)?;
    let out = if a.unsigned {
        values
            .iter()
            .map(|&v| unsigned_round(v, a.lsb, direction, a.clip_width))
            .collect::<Result<Vec<i64>, _>>()?
    } else {
        values
            .iter()
            .map(|&v| round(v, a.lsb, direction, a.clip_width))
            .collect()
    };
    finish(&a.io, "round", &out)
}

pub fn run_truncate(a: TruncateArgs) -> anyhow::Result<()> {
    log::debug!("truncate lsb={} symmetric={}", a.lsb, a.symmetric);
    let values = read_values(&a.io)?;
    let out: Vec<i64> = values
        .iter()
        .map(|&v| truncate(v, a.lsb, a.symmetric))
        .collect();
    finish(&a.io, "truncate", &out)
}

pub fn run_to_unsigned(a: ConvertArgs) -> anyhow::Result<()> {
    let values = read_values(&a.io)?;
    let out = values
        .iter()
        .map(|&v| to_unsigned(v, a.width))
        .collect::<Result<Vec<u64>, _>>()?;
    log::info!(
        "to-unsigned: {} values, crc32=0x{:08x}",
        out.len(),
        fingerprint(out.iter().copied())
    );
    write_values(&a.io, &out)
}

pub fn run_to_signed(a: ConvertArgs) -> anyhow::Result<()> {
    let values = read_values(&a.io)?;
    let out = values
        .iter()
        .map(|&v| to_signed(v as u64, a.width))
        .collect::<Result<Vec<i64>, _>>()?;
    finish(&a.io, "to-signed", &out)
}
