use thiserror::Error;

pub type Result<T> = std::result::Result<T, HdlError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HdlError {
    /// Unsupported rounding direction or other bad setting.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Negative input where only non-negative values are defined.
    #[error("domain error: {0}")]
    Domain(String),

    /// Bit/symbol index or slice out of bounds, or a value that does not fit.
    #[error("range error: {0}")]
    Range(String),
}
