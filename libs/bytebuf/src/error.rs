//! Error handling types.
//!
//! All fallible operations in this crate share one error type and a matching
//! result alias.

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

/// Potential errors to encounter when constructing or rendering buffers.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The encoding name matched none of the recognized set.
    ///
    /// Carries the rejected name as it was checked.
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),
    /// Hex text contained a character outside `0-9`, `a-f`, `A-F`.
    #[error("invalid hex digit {0:?}")]
    InvalidHexDigit(char),
    /// The base64 codec rejected its input text.
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),
    /// The written buffer returned an error.
    #[error(transparent)]
    Io(#[from] io::Error),
}
