//! Builds byte buffers from encoded text and renders them back.
//!
//! A buffer is a plain `Vec<u8>`; nothing is attached to it. [`from`] and
//! [`render`] are free functions so the value stays trivially copyable and
//! shareable, and the target encoding is always passed explicitly.

use super::{Error, Result, ascii, b64, binary, hex, utf8, utf16le};

/// Resolves encoding name synonyms to their canonical name.
///
/// Unknown names pass through unchanged so errors can report the original
/// text.
fn resolve_alias(name: &str) -> &str {
    match name {
        "ascii" | "latin1" => "binary",
        "base64url" => "base64",
        "ucs-2" | "ucs2" => "utf16le",
        "utf-8" => "utf8",
        other => other,
    }
}

/// Constructs a byte buffer from a string in the named encoding.
///
/// The conventional default encoding is `"utf8"`. Recognized names and their
/// aliases are listed in the crate docs. Note that `base64url` input is
/// treated as plain `base64` here; the URL-safe alphabet is not accepted.
///
/// An empty input yields an empty buffer regardless of the encoding name,
/// without consulting any codec.
///
/// Use [`render`] to convert the buffer back into text.
///
/// # Errors
///
/// Returns [`Error::UnknownEncoding`] if the name resolves to none of the
/// recognized encodings, [`Error::InvalidHexDigit`] for bad hex input, and
/// [`Error::Base64`] for bad base64 input.
pub fn from(input: &str, encoding: &str) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    match resolve_alias(encoding) {
        "utf8" => Ok(utf8::encode(input)),
        "hex" => hex::from_str(input),
        "binary" => Ok(binary::encode(input)),
        "base64" => b64::decode(input),
        "utf16le" => Ok(utf16le::encode(input)),
        other => Err(Error::UnknownEncoding(other.to_owned())),
    }
}

/// Renders a byte buffer as a string in the named encoding.
///
/// The conventional default encoding is `"utf8"`. Unlike [`from`], the name
/// is only normalized by removing hyphens (so `"utf-8"` and `"ucs-2"` work),
/// and `base64url` is its own branch producing URL-safe unpadded base64.
///
/// Pure function of the buffer contents; callable any number of times with
/// any encoding.
///
/// # Errors
///
/// Returns [`Error::UnknownEncoding`] if the hyphen-stripped name matches
/// none of the recognized encodings.
pub fn render(bytes: &[u8], encoding: &str) -> Result<String> {
    let name = encoding.replace('-', "");

    match name.as_str() {
        "hex" => Ok(hex::to_string(bytes)),
        "utf8" => Ok(utf8::decode(bytes)),
        "ascii" => Ok(ascii::decode(bytes)),
        "binary" | "latin1" => Ok(binary::decode(bytes)),
        "utf16le" | "ucs2" => Ok(utf16le::decode(bytes)),
        "base64url" => Ok(b64::encode_url_safe(bytes)),
        "base64" => Ok(b64::encode(bytes)),
        _ => Err(Error::UnknownEncoding(name)),
    }
}
