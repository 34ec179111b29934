// crates/hdlbits-core/src/quant/requantize.rs

use crate::quant::clip::{clip, wrap};
use crate::quant::round::{round, RoundDirection};
use crate::quant::truncate::truncate;

/// Settings of a requantization block.
///
/// The pipeline is:
/// 1. wrap the input to `input_width`
/// 2. remove `lsb_width` LSBs, rounding if `round_lsb` else truncating
/// 3. reduce to `output_width`, clipping if `clip_msb` else wrapping
/// 4. shift left by `gain_width` and wrap to `output_width` again
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Requantize {
    pub input_width: u32,
    pub output_width: u32,
    pub lsb_width: u32,
    pub round_lsb: bool,
    pub clip_msb: bool,
    pub gain_width: u32,
    /// Tie-break used when `round_lsb` is set.
    pub direction: RoundDirection,
}

impl Default for Requantize {
    fn default() -> Self {
        Requantize {
            input_width: 0,
            output_width: 0,
            lsb_width: 0,
            round_lsb: false,
            clip_msb: false,
            gain_width: 0,
            direction: RoundDirection::HalfAway,
        }
    }
}

impl Requantize {
    pub fn new(input_width: u32, output_width: u32) -> Self {
        Requantize {
            input_width,
            output_width,
            ..Requantize::default()
        }
    }

    pub fn with_lsb(mut self, lsb_width: u32, round_lsb: bool) -> Self {
        self.lsb_width = lsb_width;
        self.round_lsb = round_lsb;
        self
    }

    pub fn with_clip(mut self, clip_msb: bool) -> Self {
        self.clip_msb = clip_msb;
        self
    }

    pub fn with_gain(mut self, gain_width: u32) -> Self {
        self.gain_width = gain_width;
        self
    }

    pub fn with_direction(mut self, direction: RoundDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn apply(&self, value: i64) -> i64 {
        let mut r = wrap(value, self.input_width);

        r = if self.round_lsb {
            round(r, self.lsb_width, self.direction, None)
        } else {
            truncate(r, self.lsb_width, false)
        };

        r = if self.clip_msb {
            clip(r, self.output_width, false)
        } else {
            wrap(r, self.output_width)
        };

        // bits shifted past bit 63 are gone either way once wrapped to <= 64 bits
        let gained = r.checked_shl(self.gain_width).unwrap_or(0);
        wrap(gained, self.output_width)
    }

    pub fn apply_all(&self, values: &[i64]) -> Vec<i64> {
        values.iter().map(|&v| self.apply(v)).collect()
    }
}

/// Free-function form of [`Requantize::apply`] with `HalfAway` rounding.
pub fn requantize(
    value: i64,
    input_width: u32,
    output_width: u32,
    lsb_width: u32,
    round_lsb: bool,
    clip_msb: bool,
    gain_width: u32,
) -> i64 {
    Requantize::new(input_width, output_width)
        .with_lsb(lsb_width, round_lsb)
        .with_clip(clip_msb)
        .with_gain(gain_width)
        .apply(value)
}
