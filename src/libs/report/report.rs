use std::fmt::{Display, Formatter};
use std::fmt;
use log::debug;

use crate::libs::code_converter::code_converter::{binary_string_to_decimal, binary_to_gray_string, decimal_to_binary_string, decimal_to_gray_string, gray_to_binary_string, Decimal};
use crate::libs::code_converter::error::{ConversionError, FormatFault};

/// The representation the user typed their value in.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum InputKind {
    Decimal, Binary, Gray
}

impl Display for InputKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputKind::Decimal => "Decimal",
            InputKind::Binary => "Binary",
            InputKind::Gray => "Gray code",
        };
        write!(f, "{}", name)
    }
}

/// Parse a decimal integer as typed, surrounding whitespace ignored. Negative values parse;
/// they're rejected when converted.
pub fn parse_decimal(text: &str) -> Result<Decimal, ConversionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::InvalidArgument("decimal value"));
    }
    trimmed.parse::<Decimal>()
        .map_err(|_| ConversionError::format(trimmed, FormatFault::NotADecimal))
}

/// Everything shown for one converted value, including the Gray string's value when it is
/// (wrongly) read as plain binary.
#[derive(Debug, PartialEq, Clone)]
pub struct ConversionReport {
    pub kind: InputKind,
    pub input: String,
    pub binary: String,
    pub decimal: Decimal,
    pub gray: String,
    pub gray_misread_as_binary: Decimal,
}

impl ConversionReport {
    pub fn from_input(kind: InputKind, text: &str) -> Result<ConversionReport, ConversionError> {
        let input = text.trim().to_owned();
        let (binary, decimal, gray) = match kind {
            InputKind::Decimal => {
                let decimal = parse_decimal(&input)?;
                (decimal_to_binary_string(decimal)?, decimal, decimal_to_gray_string(decimal)?)
            }
            InputKind::Binary => {
                let decimal = binary_string_to_decimal(&input)?;
                (input.clone(), decimal, binary_to_gray_string(&input)?)
            }
            InputKind::Gray => {
                let binary = gray_to_binary_string(&input)?;
                let decimal = binary_string_to_decimal(&binary)?;
                (binary, decimal, input.clone())
            }
        };
        let gray_misread_as_binary = binary_string_to_decimal(&gray)?;
        debug!("{} input '{}' is {} / {} / {}", kind, input, binary, decimal, gray);
        Ok(ConversionReport { kind, input, binary, decimal, gray, gray_misread_as_binary })
    }

    /// The report lines, optionally without the misread diagnostic.
    pub fn lines(&self, show_misinterpretation: bool) -> Vec<String> {
        let mut out = vec![
            format!("Input ({}): {}", self.kind, self.input),
            format!("Binary: {}", self.binary),
            format!("Decimal (from binary): {}", self.decimal),
            format!("Gray code: {}", self.gray),
        ];
        if show_misinterpretation {
            out.push(format!("Decimal (Gray code read as binary): {}", self.gray_misread_as_binary));
        }
        out
    }
}

impl Display for ConversionReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines(true).join("\n"))
    }
}

#[cfg(test)]
#[path = "./report_spec.rs"]
mod report_spec;
