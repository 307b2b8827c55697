//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("length mismatch: expected {expected} bytes, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("unsupported type: {0}")]
    UnsupportedType(&'static str),
    #[error("value {value} is not defined in {ty}")]
    UndefinedEnumValue { ty: &'static str, value: String },
    #[error("invalid decimal flags: {0:#010x}")]
    InvalidDecimal(u32),
    #[error("char {0:#x} does not fit in a single UTF-16 code unit")]
    InvalidChar(u32),
    #[error("invalid {0} text")]
    InvalidText(&'static str),
}
