// crates/hdlbits-cli/src/cmd/requantize.rs

use clap::Args;
use hdlbits_core::quant::{Requantize, RoundDirection};

use crate::io::values::{finish, read_values, ValueIo};

#[derive(Args, Debug)]
pub struct RequantizeArgs {
    /// Input data width; inputs are wrapped to it first
    #[arg(long)]
    pub input_width: u32,

    /// Output data width
    #[arg(long)]
    pub output_width: u32,

    /// Number of LSBs to remove
    #[arg(long, default_value_t = 0)]
    pub lsb_width: u32,

    /// Round the LSBs (default: truncate)
    #[arg(long)]
    pub round: bool,

    /// Clip the MSBs (default: wrap)
    #[arg(long)]
    pub clip: bool,

    /// Output gain in bits (shift left, then wrap)
    #[arg(long, default_value_t = 0)]
    pub gain_width: u32,

    /// Tie-break for --round: HALF_UP | HALF_AWAY | HALF_EVEN
    #[arg(long, default_value = "HALF_AWAY")]
    pub direction: String,

    #[command(flatten)]
    pub io: ValueIo,
}

impl RequantizeArgs {
    fn to_block(&self) -> anyhow::Result<Requantize> {
        let direction = RoundDirection::parse(&self.direction)?;
        Ok(Requantize::new(self.input_width, self.output_width)
            .with_lsb(self.lsb_width, self.round)
            .with_clip(self.clip)
            .with_gain(self.gain_width)
            .with_direction(direction))
    }
}

pub fn run(args: RequantizeArgs) -> anyhow::Result<()> {
    let q = args.to_block()?;
    if q.output_width == 0 {
        log::warn!("output_width 0: every result is 0");
    }
    log::info!("requantize {:?}", q);

    let values = read_values(&args.io)?;
    let out = q.apply_all(&values);
    finish(&args.io, "requantize", &out)
}
