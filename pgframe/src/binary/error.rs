//! Binary COPY format errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("binary copy signature incorrect")]
    InvalidSignature,

    #[error("binary copy stream uses per-field oids")]
    UnsupportedOids,

    #[error("binary copy stream ends early")]
    TruncatedStream,

    #[error("invalid field count ({0})")]
    InvalidFieldCount(i16),

    #[error("expected {expected} column(s), but found {found}")]
    ColumnCountMismatch { expected: usize, found: usize },

    #[error("tuple {row} has {found} field(s), first tuple had {expected}")]
    FieldCountMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid field length ({0})")]
    InvalidFieldLength(i32),
}
