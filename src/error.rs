//! Common error types.

use std::fmt;

/// A shortcut type equivalent to `Result<T, text2png::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error that occurs within the crate.
#[derive(Debug)]
pub enum Error {
    /// An invalid hex code was provided when trying to parse a color value.
    InvalidHexCode(String),

    /// An error occured while trying to load or rasterize a font.
    FontError(&'static str),

    /// No installed font face matched the requested family name or index.
    FontNotFound(String),

    /// Failed to encode an image.
    EncodingError(String),

    /// An error occured when trying to read a file or when trying to write to a file.
    IoError(std::io::Error),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidHexCode(hex_code) => write!(f, "Invalid hex code: {hex_code}"),
            Self::FontError(msg) => write!(f, "Font error: {msg}"),
            Self::FontNotFound(family) => write!(f, "Could not find font: {family}"),
            Self::EncodingError(msg) => write!(f, "Encoding error: {msg}"),
            Self::IoError(error) => write!(f, "IO error: {error}"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err)
    }
}

impl From<png::EncodingError> for Error {
    fn from(err: png::EncodingError) -> Self {
        match err {
            png::EncodingError::IoError(err) => Self::IoError(err),
            png::EncodingError::Format(err) => Self::EncodingError(err.to_string()),
            png::EncodingError::LimitsExceeded => {
                Self::EncodingError("limits exceeded".to_string())
            }
            png::EncodingError::Parameter(err) => Self::EncodingError(err.to_string()),
        }
    }
}
