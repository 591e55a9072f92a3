use log::debug;

use crate::libs::code_converter::code_converter::{decimal_to_binary_string, decimal_to_gray_string, Decimal};
use crate::libs::code_converter::gray::to_gray_code;

pub const MIN_TABLE_BITS: u8 = 1;
pub const MAX_TABLE_BITS: u8 = 16;

#[derive(Debug, PartialEq, Clone)]
pub struct CodeTableRow {
    pub decimal: Decimal,
    pub binary: String,
    pub gray: String,
    // Zero-based position of the bit that changed from the previous row's Gray code.
    pub changed_bit: Option<u32>,
}

fn pad(digits: String, width: usize) -> String {
    format!("{:0>width$}", digits, width = width)
}

/// Every value representable in `bits` digits, with its binary and Gray forms padded to that
/// width.
pub fn code_table(bits: u8) -> Result<Vec<CodeTableRow>, String> {
    if bits < MIN_TABLE_BITS || bits > MAX_TABLE_BITS {
        return Err(format!("Table width of {} bits is out of the range [{}..{}]", bits, MIN_TABLE_BITS, MAX_TABLE_BITS));
    }
    let width = bits as usize;
    let mut rows = Vec::with_capacity(1 << bits);
    for decimal in 0..(1 as Decimal) << bits {
        let binary = decimal_to_binary_string(decimal).map_err(|e| e.to_string())?;
        let gray = decimal_to_gray_string(decimal).map_err(|e| e.to_string())?;
        let changed_bit = if decimal == 0 {
            None
        } else {
            let difference = to_gray_code(decimal as u64) ^ to_gray_code((decimal - 1) as u64);
            Some(difference.trailing_zeros())
        };
        rows.push(CodeTableRow { decimal, binary: pad(binary, width), gray: pad(gray, width), changed_bit });
    }
    debug!("Built a {} bit table of {} rows", bits, rows.len());
    Ok(rows)
}

pub fn format_table(rows: &[CodeTableRow]) -> Vec<String> {
    let width = rows.first().map(|row| row.binary.len()).unwrap_or(0).max("Binary".len());
    let mut out = vec![format!("{:>7}  {:<width$}  {:<width$}  {}", "Decimal", "Binary", "Gray", "Changed bit", width = width)];
    for row in rows {
        let changed = row.changed_bit.map(|bit| bit.to_string()).unwrap_or_else(|| "-".to_owned());
        out.push(format!("{:>7}  {:<width$}  {:<width$}  {}", row.decimal, row.binary, row.gray, changed, width = width));
    }
    out
}

#[cfg(test)]
#[path = "./code_table_spec.rs"]
mod code_table_spec;
