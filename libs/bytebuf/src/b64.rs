//! Base64 conversions, backed by the [`base64`] crate.
//!
//! [`decode`] only accepts the standard alphabet. There is no URL-safe
//! construction path; `base64url` is an alias for `base64` when building a
//! buffer and only exists as a distinct *rendering* (see [`encode_url_safe`]).

use base64::prelude::*;

use super::Result;

/// Encodes bytes as standard base64 text, with padding.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    BASE64_STANDARD.encode(bytes)
}

/// Encodes bytes as URL-safe base64 text, without padding.
///
/// Equivalent to [`encode`] followed by swapping `+`/`/` for `-`/`_` and
/// dropping the padding.
#[must_use]
pub fn encode_url_safe(bytes: &[u8]) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(bytes)
}

/// Decodes standard base64 text into bytes.
///
/// # Errors
///
/// Returns [`Err`] if the input is not valid padded standard-alphabet
/// base64.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    Ok(BASE64_STANDARD.decode(input)?)
}
