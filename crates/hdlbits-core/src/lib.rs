pub mod error;

pub mod bits;
pub mod convert;
pub mod quant;

pub use crate::bits::{concatenate, Bits, Symbols};
pub use crate::error::{HdlError, Result};
pub use crate::quant::{Requantize, RoundDirection};
