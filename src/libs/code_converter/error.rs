use std::fmt;
use thiserror::Error;

use crate::libs::code_converter::code_converter::Decimal;

/// Why a piece of text could not be read as a number.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FormatFault {
    /// A character outside `{'0','1'}`; position is zero-based, in characters.
    InvalidDigit { digit: char, position: usize },
    /// The binary numeral does not fit in a `Decimal`.
    Overflow,
    /// The text is not a decimal integer.
    NotADecimal,
}

impl fmt::Display for FormatFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatFault::InvalidDigit { digit, position } => {
                write!(f, "'{}' at position {} is not a binary digit", digit, position)
            }
            FormatFault::Overflow => write!(f, "value is too large"),
            FormatFault::NotADecimal => write!(f, "not a decimal integer"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConversionError {
    /// A required input was empty.
    #[error("{0} cannot be empty")]
    InvalidArgument(&'static str),

    /// The input contains characters outside the expected alphabet, or cannot be
    /// represented.
    #[error("invalid input '{text}': {fault}")]
    Format { text: String, fault: FormatFault },

    /// Negative values have no simple binary string form.
    #[error("negative value {0} is not supported")]
    Range(Decimal),
}

impl ConversionError {
    pub(crate) fn format(text: &str, fault: FormatFault) -> ConversionError {
        ConversionError::Format { text: text.to_owned(), fault }
    }
}
