use crate::libs::code_converter::error::{ConversionError, FormatFault};

/// The canonical numeric form. Only non-negative values have a binary or Gray string form.
pub type Decimal = i64;

/// A binary digit, always 0 or 1.
type Bit = u8;

// Offset each character from '0'; anything that doesn't land on 0 or 1 is rejected.
fn binary_digits(text: &str) -> Result<Vec<Bit>, ConversionError> {
    text.chars()
        .enumerate()
        .map(|(position, digit)| match digit {
            '0' | '1' => Ok((digit as u32 - '0' as u32) as Bit),
            _ => Err(ConversionError::format(text, FormatFault::InvalidDigit { digit, position })),
        })
        .collect()
}

fn digits_to_string(bits: &[Bit]) -> String {
    bits.iter().map(|bit| (b'0' + bit) as char).collect()
}

/// Interpret `text` as a base-2 numeral, most significant digit first. Leading zeros are
/// permitted.
pub fn binary_string_to_decimal(text: &str) -> Result<Decimal, ConversionError> {
    if text.is_empty() {
        return Err(ConversionError::InvalidArgument("binary string"));
    }
    let bits = binary_digits(text)?;
    bits.iter().try_fold(0 as Decimal, |value, bit| {
        value
            .checked_mul(2)
            .and_then(|shifted| shifted.checked_add(*bit as Decimal))
            .ok_or_else(|| ConversionError::format(text, FormatFault::Overflow))
    })
}

/// The minimal binary string for `value`; "0" for zero, otherwise no leading zeros.
pub fn decimal_to_binary_string(value: Decimal) -> Result<String, ConversionError> {
    if value < 0 {
        return Err(ConversionError::Range(value));
    }
    Ok(format!("{:b}", value))
}

/// Decode a Gray string. Each output bit is the input bit XORed with the previous *output*
/// bit, so the XOR accumulates along the string.
pub fn gray_to_binary_string(text: &str) -> Result<String, ConversionError> {
    let gray = binary_digits(text)?;
    let mut binary: Vec<Bit> = Vec::with_capacity(gray.len());
    let mut previous_output: Bit = 0;
    for bit in gray {
        previous_output ^= bit;
        binary.push(previous_output);
    }
    Ok(digits_to_string(&binary))
}

/// Encode a binary string as Gray. Each output bit is the input bit XORed with the previous
/// *input* bit; nothing accumulates.
pub fn binary_to_gray_string(text: &str) -> Result<String, ConversionError> {
    let binary = binary_digits(text)?;
    let mut gray: Vec<Bit> = Vec::with_capacity(binary.len());
    let mut previous_input: Bit = 0;
    for bit in binary {
        gray.push(bit ^ previous_input);
        previous_input = bit;
    }
    Ok(digits_to_string(&gray))
}

pub fn gray_string_to_decimal(text: &str) -> Result<Decimal, ConversionError> {
    let binary = gray_to_binary_string(text)?;
    binary_string_to_decimal(&binary)
}

pub fn decimal_to_gray_string(value: Decimal) -> Result<String, ConversionError> {
    let binary = decimal_to_binary_string(value)?;
    binary_to_gray_string(&binary)
}

#[cfg(test)]
#[path = "./code_converter_spec.rs"]
mod code_converter_spec;
