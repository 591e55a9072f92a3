// Numeric reflected-binary code, operating on whole words rather than digit strings.

pub fn to_gray_code(value: u64) -> u64 {
    value ^ (value >> 1)
}

// Every binary bit is the XOR of all Gray bits at or above it.
pub fn from_gray_code(gray: u64) -> u64 {
    let mut value = gray;
    let mut shifted = gray >> 1;
    while shifted != 0 {
        value ^= shifted;
        shifted >>= 1;
    }
    value
}

#[cfg(test)]
#[path = "gray_spec.rs"]
mod gray_spec;
