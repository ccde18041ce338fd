//! Converts strings to and from UTF-8 bytes.

/// Encodes a string as its UTF-8 bytes.
#[must_use]
pub fn encode(input: &str) -> Vec<u8> {
    input.as_bytes().to_vec()
}

/// Decodes UTF-8 bytes into a string.
///
/// Malformed sequences are replaced with U+FFFD rather than failing.
#[must_use]
pub fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
