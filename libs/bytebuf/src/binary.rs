//! Converts strings to and from the "binary" encoding.
//!
//! Each byte corresponds to one [`char`] of the string with the equivalent
//! code point value. Decoding is total since every value `0x0` to `0xFF` is
//! a valid code point; the codec is a bijection on that range.
//!
//! Encoding a string whose code units exceed `0xFF` keeps only the low 8
//! bits of each unit. This truncation is part of the format, not a failure.

/// Encodes a string into "binary" bytes.
///
/// Each UTF-16 code unit of the input becomes one byte, truncated to its low
/// 8 bits. The output has exactly one byte per code unit.
///
/// Use [`decode`] to reverse the operation.
#[must_use]
pub fn encode(input: &str) -> Vec<u8> {
    input
        .encode_utf16()
        .map(|unit| {
            let [low, _] = unit.to_le_bytes();
            low
        })
        .collect()
}

/// Decodes "binary" bytes into a string.
///
/// Each byte becomes the [`char`] with the equivalent code point.
///
/// Use [`encode`] to reverse the operation.
#[must_use]
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
