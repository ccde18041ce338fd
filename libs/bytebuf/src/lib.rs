//! Conversions between raw byte buffers and textual encodings.
//!
//! Supported encodings:
//!
//! - `binary`: one [`char`] per byte, code points `0x0` to `0xFF`
//! - `hex`: lowercase hexadecimal, two digits per byte
//! - `base64`: standard alphabet with padding; rendering also supports a
//!   URL-safe unpadded `base64url` variant
//! - `utf8`: the string's UTF-8 bytes
//! - `utf16le`: little-endian 16-bit code units (see [`utf16le`] for the
//!   construction caveat)
//! - `ascii`: render-only, each byte masked to its low 7 bits
//!
//! [`from`] builds a byte buffer from encoded text and [`render`] converts a
//! buffer back into text in any of these encodings. Both take the encoding
//! by name; `"utf8"` is the conventional default. Recognized name aliases:
//!
//! | alias              | encoding  |
//! |--------------------|-----------|
//! | `ascii`, `latin1`  | `binary`  |
//! | `base64url`        | `base64`  |
//! | `ucs-2`, `ucs2`    | `utf16le` |
//! | `utf-8`            | `utf8`    |
//!
//! The individual codecs are exposed as modules for direct use.

// for benchmarks
#[cfg(test)]
use criterion as _;
#[cfg(test)]
use smallvec as _;

pub mod ascii;
pub mod b64;
pub mod binary;
mod buffer;
mod error;
pub mod hex;
pub mod utf16le;
pub mod utf8;

pub use buffer::{from, render};
pub use error::{Error, Result};
