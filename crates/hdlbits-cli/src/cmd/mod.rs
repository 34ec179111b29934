// crates/hdlbits-cli/src/cmd/mod.rs

pub mod bits;
pub mod quant;
pub mod requantize;
