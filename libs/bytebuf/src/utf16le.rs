//! Converts strings to and from UTF-16LE bytes.
//!
//! The two directions are intentionally asymmetric:
//!
//! - [`encode`] interleaves the string's UTF-8 bytes with zero bytes. For
//!   ASCII input this equals real UTF-16LE, since every code unit fits in
//!   one byte. Multi-byte UTF-8 sequences are *not* widened into 16-bit code
//!   units, so non-ASCII input produces bytes that no UTF-16LE decoder will
//!   read back as the original string. This lossy construction is part of
//!   the format and must not be "corrected".
//! - [`decode`] is a proper UTF-16LE decode: bytes are paired into
//!   little-endian code units, unpaired surrogates become U+FFFD, and a
//!   trailing lone byte also becomes U+FFFD.

/// Encodes a string as UTF-16LE-shaped bytes.
///
/// Every even-indexed output byte is the corresponding UTF-8 byte of the
/// input and every odd-indexed byte is zero. Only correct for ASCII input;
/// see the module docs.
#[must_use]
pub fn encode(input: &str) -> Vec<u8> {
    let utf8 = input.as_bytes();
    let mut out = vec![0u8; utf8.len() * 2];

    for (i, &b) in utf8.iter().enumerate() {
        out[i * 2] = b;
    }

    out
}

/// Decodes UTF-16LE bytes into a string.
///
/// Invalid code unit sequences and a trailing lone byte are replaced with
/// U+FFFD rather than failing.
#[must_use]
pub fn decode(bytes: &[u8]) -> String {
    let (pairs, remainder) = bytes.as_chunks::<2>();
    let units = pairs.iter().copied().map(u16::from_le_bytes);

    let mut out: String = char::decode_utf16(units)
        .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();

    if !remainder.is_empty() {
        out.push(char::REPLACEMENT_CHARACTER);
    }

    out
}
