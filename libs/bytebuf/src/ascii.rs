//! Renders bytes as 7-bit ASCII text.
//!
//! This direction only exists for output. Constructing bytes from "ascii"
//! text goes through the binary codec instead (see the alias table in the
//! crate docs).

/// Decodes bytes into ASCII text, masking each byte to its low 7 bits.
#[must_use]
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b & 0x7F)).collect()
}
