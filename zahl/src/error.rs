use std::error::Error;
use std::fmt;

use crate::NumberKind;

/// Recoverable numeric fault. Every signaling operation returns this
/// through `Result`; nothing substitutes a default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberError {
    DivisionByZero,
    TypeError {
        expected: &'static str,
        found: NumberKind,
    },
    NotFinite,
    InvalidRadix(u32),
    InvalidLiteral,
}

impl fmt::Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberError::DivisionByZero => write!(f, "division by zero"),
            NumberError::TypeError { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
            NumberError::NotFinite => write!(f, "not a finite number"),
            NumberError::InvalidRadix(radix) => {
                write!(f, "invalid radix {}", radix)
            }
            NumberError::InvalidLiteral => write!(f, "invalid numeric literal"),
        }
    }
}

impl Error for NumberError {}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumberKind::Int => "integer",
            NumberKind::Ratio => "ratio",
            NumberKind::Float => "float",
            NumberKind::Complex => "complex",
        };
        f.write_str(name)
    }
}
