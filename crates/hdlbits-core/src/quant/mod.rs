// crates/hdlbits-core/src/quant/mod.rs
//
// Fixed-point quantization primitives.
//
// All functions take a signed value held in an `i64` plus an explicit bit
// width and return the value as the equivalent HDL component would produce it.
// Width 0 is a degenerate case (clip/wrap return 0, round/truncate pass the
// value through). Widths >= 64 leave every `i64` representable.

pub mod clip;
pub mod requantize;
pub mod round;
pub mod truncate;

pub use clip::{clip, signed_max, signed_min, wrap};
pub use requantize::{requantize, Requantize};
pub use round::{round, unsigned_round, RoundDirection};
pub use truncate::truncate;
