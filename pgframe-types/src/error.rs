//! Decoding errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("wrong size binary (expected {0}, got {1}) for type")]
    LengthMismatch(usize, usize),

    #[error("not utf-8")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("unknown data type \"{0}\"")]
    UnknownType(String),
}
