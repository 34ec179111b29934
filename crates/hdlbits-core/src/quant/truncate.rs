// crates/hdlbits-core/src/quant/truncate.rs

/// Remove the `r` LSBs of `value`.
///
/// The default (asymmetric) mode is the HDL `shift_right`, i.e. rounding toward
/// -infinity. With `symmetric` set, negative values are truncated as
/// `-((-value) >> r)`, which rounds toward zero.
pub fn truncate(value: i64, r: u32, symmetric: bool) -> i64 {
    if r == 0 {
        return value;
    }
    // i128 so that -i64::MIN and shifts >= 64 stay well defined
    let v = value as i128;
    let r = r.min(127);
    let out = if symmetric && v < 0 { -((-v) >> r) } else { v >> r };
    out as i64
}
