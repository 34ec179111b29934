// crates/hdlbits-core/src/quant/round.rs

use std::fmt;
use std::str::FromStr;

use crate::error::{HdlError, Result};
use crate::quant::clip::signed_max;

/// Tie-break policy applied when the discarded LSBs are exactly one half.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundDirection {
    /// Ties go toward +infinity: +0.5 -> 1, -0.5 -> 0.
    HalfUp,
    /// Ties go away from zero: +0.5 -> 1, -0.5 -> -1.
    #[default]
    HalfAway,
    /// Ties go to the even neighbour: +0.5 -> 0, +1.5 -> 2, -1.5 -> -2.
    HalfEven,
}

impl RoundDirection {
    pub const ALL: [RoundDirection; 3] = [
        RoundDirection::HalfUp,
        RoundDirection::HalfAway,
        RoundDirection::HalfEven,
    ];

    /// Parse one of the fixed tokens `HALF_UP`, `HALF_AWAY`, `HALF_EVEN`.
    /// Matching is case-sensitive.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "HALF_UP" => Ok(RoundDirection::HalfUp),
            "HALF_AWAY" => Ok(RoundDirection::HalfAway),
            "HALF_EVEN" => Ok(RoundDirection::HalfEven),
            _ => Err(HdlError::Configuration(format!(
                "unsupported round direction: {s:?} (expected HALF_UP, HALF_AWAY or HALF_EVEN)"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoundDirection::HalfUp => "HALF_UP",
            RoundDirection::HalfAway => "HALF_AWAY",
            RoundDirection::HalfEven => "HALF_EVEN",
        }
    }
}

impl FromStr for RoundDirection {
    type Err = HdlError;

    fn from_str(s: &str) -> Result<Self> {
        RoundDirection::parse(s)
    }
}

impl fmt::Display for RoundDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round away the `r` LSBs of a signed value.
///
/// `r == 0` returns `value` unchanged. When `clip` is `Some(w)` the rounded
/// result is limited to `signed_max(w)`, which catches the +1 growth that
/// rounding can cause at the top of the range. Only the upper side is
/// clamped; there is no lower clamp.
pub fn round(value: i64, r: u32, direction: RoundDirection, clip: Option<u32>) -> i64 {
    if r == 0 {
        return value;
    }
    // Past 64 bits every i64 rounds to 0 or -1; cap the shift so i128 math holds.
    let r = r.min(96);
    let v = value as i128;
    let factor = 1i128 << r;
    let half = 1i128 << (r - 1);

    // >> on i128 is floor division by 2^r
    let mut out = match direction {
        RoundDirection::HalfUp => (v + half) >> r,
        RoundDirection::HalfAway => {
            if v >= 0 {
                (v + half) >> r
            } else {
                (v + half - 1) >> r
            }
        }
        RoundDirection::HalfEven => {
            let up = (v + half) >> r;
            if v.rem_euclid(factor) == half && up.rem_euclid(2) == 1 {
                up - 1
            } else {
                up
            }
        }
    };

    if let Some(w) = clip {
        out = out.min(signed_max(w) as i128);
    }
    out as i64
}

/// Round away the `r` LSBs of a non-negative value.
///
/// Same as [`round`] with the clip width widened by one bit for the implicit
/// sign. For unsigned inputs `HalfUp` and `HalfAway` coincide.
pub fn unsigned_round(
    value: i64,
    r: u32,
    direction: RoundDirection,
    clip: Option<u32>,
) -> Result<i64> {
    if value < 0 {
        return Err(HdlError::Domain(format!(
            "unsigned_round input must be >= 0, got {value}"
        )));
    }
    Ok(round(value, r, direction, clip.map(|w| w.saturating_add(1))))
}
