//! Converts bytes to and from hexadecimal text.
//!
//! Encoding is table-driven: every byte maps to its two-digit lowercase pair,
//! so the output is always exactly twice the byte count.
//!
//! Decoding parses consecutive two-digit groups, accepting both cases. An
//! input with an odd digit count is treated as if a `'0'` was appended, i.e.
//! the lone trailing digit becomes the *high* nibble of the last byte:
//! `"f"` decodes to `[0xF0]`, not `[0x0F]`.

use std::{fmt, io};

use super::{Error, Result};

/// All 256 hexadecimal pairs (max index = 255).
static HEX_PAIRS: [[u8; 2]; 256] = {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut table = [[0u8; 2]; 256];
    let mut i = 0;
    while i < table.len() {
        table[i] = [DIGITS[i >> 4], DIGITS[i & 0xF]];
        i += 1;
    }

    table
};

/// Encodes bytes as hex, returning a [`String`] with the result.
///
/// This is equivalent to using [`encode`] with a [`String`].
///
/// Use [`from_str`] to reverse the operation.
#[must_use]
pub fn to_string(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(bytes.len() * 2);

    encode(&mut result, bytes).expect("write to String cannot fail");

    result
}

/// Encodes bytes as hex, writing them to a buffer.
///
/// Use [`decode`] to reverse the operation.
///
/// # Errors
///
/// Returns [`Err`] if and only if `writer` returns [`Err`].
pub fn encode<W: fmt::Write>(mut writer: W, bytes: &[u8]) -> fmt::Result {
    for &b in bytes {
        let [hi, lo] = HEX_PAIRS[usize::from(b)];
        writer.write_char(char::from(hi))?;
        writer.write_char(char::from(lo))?;
    }

    Ok(())
}

/// Decodes a string holding hex digits.
///
/// # Errors
///
/// Returns [`Err`] if the input contains a non-hex character.
pub fn from_str(input: &str) -> Result<Vec<u8>> {
    let mut result = Vec::with_capacity(input.len().div_ceil(2));

    decode(&mut result, input)?;
    Ok(result)
}

/// Decodes a string holding hex digits, writing the bytes to a buffer.
///
/// # Errors
///
/// Returns [`Err`] if the input contains a non-hex character or `writer`
/// returns [`Err`].
pub fn decode<W: io::Write>(mut writer: W, input: &str) -> Result<()> {
    let mut chars = input.chars();
    while let Some(hi) = chars.next() {
        let hi = digit(hi)?;
        // an odd digit count acts as if a trailing '0' was appended
        let lo = match chars.next() {
            Some(lo) => digit(lo)?,
            None => 0,
        };

        writer.write_all(&[(hi << 4) | lo])?;
    }

    Ok(())
}

fn digit(c: char) -> Result<u8> {
    let value = match c {
        '0'..='9' => u32::from(c) - u32::from('0'),
        'a'..='f' => u32::from(c) - u32::from('a') + 10,
        'A'..='F' => u32::from(c) - u32::from('A') + 10,
        _ => return Err(Error::InvalidHexDigit(c)),
    };

    u8::try_from(value).map_err(|_| Error::InvalidHexDigit(c))
}
