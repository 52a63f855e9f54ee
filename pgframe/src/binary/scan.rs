//! Single-pass scan of the tuple section.
//!
//! Locates every field of every tuple and groups the payloads by
//! column, without copying bytes. Decoding happens later, per column.

use pgframe_types::Data;
use tracing::debug;

use super::{Cursor, Error};

/// Field payloads grouped by column index, in tuple order.
#[derive(Debug, Clone, Default)]
pub struct RawColumns {
    columns: Vec<Vec<Data>>,
    rows: usize,
}

impl RawColumns {
    pub fn columns(&self) -> usize {
        self.columns.len()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn column(&self, index: usize) -> Option<&[Data]> {
        self.columns.get(index).map(|cells| cells.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Data]> {
        self.columns.iter().map(|cells| cells.as_slice())
    }

    pub fn into_columns(self) -> Vec<Vec<Data>> {
        self.columns
    }
}

/// Walk the tuple section in one forward pass.
///
/// The first tuple establishes the column count. `expected_columns`
/// is the caller's declared width; the first tuple has to match it.
/// Stops at the trailer; bytes after it are ignored.
pub fn scan(cursor: &mut Cursor, expected_columns: Option<usize>) -> Result<RawColumns, Error> {
    let mut columns: Vec<Vec<Data>> = Vec::new();
    let mut width: Option<usize> = None;
    let mut rows = 0_usize;

    loop {
        let fields = cursor.get_i16()?;

        if fields == -1 {
            break;
        }

        if fields < 0 {
            return Err(Error::InvalidFieldCount(fields));
        }

        let fields = fields as usize;
        match width {
            None => {
                if let Some(expected) = expected_columns {
                    if fields != expected {
                        return Err(Error::ColumnCountMismatch {
                            expected,
                            found: fields,
                        });
                    }
                }
                width = Some(fields);
                columns = vec![Vec::new(); fields];
            }

            Some(width) => {
                if fields != width {
                    return Err(Error::FieldCountMismatch {
                        row: rows,
                        expected: width,
                        found: fields,
                    });
                }
            }
        }

        for column in columns.iter_mut() {
            let len = cursor.get_i32()?;

            if len == -1 {
                column.push(Data::null());
                continue;
            }

            if len < 0 {
                return Err(Error::InvalidFieldLength(len));
            }

            column.push(Data::from(cursor.take(len as usize)?));
        }

        rows += 1;
    }

    // An empty relation still has the declared width.
    if width.is_none() {
        if let Some(expected) = expected_columns {
            columns = vec![Vec::new(); expected];
        }
    }

    debug!("scanned {} row(s) into {} column(s)", rows, columns.len());

    Ok(RawColumns { columns, rows })
}
