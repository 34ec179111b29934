// crates/hdlbits-cli/src/io/mod.rs

pub mod values;
