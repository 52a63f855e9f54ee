//! Binary COPY format.
//!
//! The decoder runs in two stages over one immutable buffer: the
//! header is validated first, then the tuple section is scanned into
//! per-column payload slices. Nothing is copied and nothing is
//! decoded here; byte ranges only.

pub mod cursor;
pub mod error;
pub mod header;
pub mod scan;

pub use cursor::Cursor;
pub use error::Error;
pub use header::Header;
pub use scan::{scan, RawColumns};

use bytes::Bytes;

/// Validate the header and locate every field of every tuple, in one
/// forward pass over the buffer.
pub fn read_columns(
    buffer: impl Into<Bytes>,
    expected_columns: Option<usize>,
) -> Result<RawColumns, Error> {
    let mut cursor = Cursor::new(buffer.into());
    Header::read(&mut cursor)?;
    scan(&mut cursor, expected_columns)
}
