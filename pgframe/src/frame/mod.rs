//! Typed, named columns decoded from a binary COPY stream.

pub mod column;
pub mod error;
pub mod schema;

pub use column::Column;
pub use error::Error;
pub use schema::{ColumnDef, Schema};

use std::path::Path;

use bytes::Bytes;
use pgframe_types::Value;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::binary;

/// Decoded relation: named, typed, nullable columns in declared
/// order. Built in one pass over the stream; either every cell
/// decodes or the whole frame fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    schema: Schema,
    columns: Vec<Column>,
    rows: usize,
}

impl Frame {
    /// Decode a complete in-memory stream against the schema.
    /// Columns decode in parallel; cells within a column stay in
    /// tuple order.
    pub fn from_bytes(buffer: impl Into<Bytes>, schema: &Schema) -> Result<Self, Error> {
        Self::decode(buffer, schema, true)
    }

    /// Same result as [`Frame::from_bytes`], decoded on one thread.
    pub fn from_bytes_sequential(buffer: impl Into<Bytes>, schema: &Schema) -> Result<Self, Error> {
        Self::decode(buffer, schema, false)
    }

    fn decode(buffer: impl Into<Bytes>, schema: &Schema, parallel: bool) -> Result<Self, Error> {
        let raw = binary::read_columns(buffer, Some(schema.len()))?;
        let rows = raw.rows();
        let cells = raw.into_columns();

        let columns = if parallel {
            schema
                .columns()
                .par_iter()
                .zip(cells.into_par_iter())
                .map(|(def, cells)| Column::decode(&cells, def.data_type()))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            schema
                .columns()
                .iter()
                .zip(cells)
                .map(|(def, cells)| Column::decode(&cells, def.data_type()))
                .collect::<Result<Vec<_>, _>>()?
        };

        debug!("decoded {} row(s), {} column(s)", rows, columns.len());

        Ok(Self {
            schema: schema.clone(),
            columns,
            rows,
        })
    }

    /// Read and decode a binary COPY file.
    pub fn load(path: impl AsRef<Path>, schema: &Schema) -> Result<Self, Error> {
        let path = path.as_ref();
        let buffer = std::fs::read(path)?;
        info!("loaded \"{}\" ({} bytes)", path.display(), buffer.len());
        Self::from_bytes(buffer, schema)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.get(self.schema.position(name)?)
    }

    /// One row of values across all columns. `None` past the last
    /// row; NULL cells are `None` inside the row.
    pub fn row(&self, index: usize) -> Option<Vec<Option<Value>>> {
        if index >= self.rows {
            return None;
        }

        Some(
            self.columns
                .iter()
                .map(|column| column.value(index))
                .collect(),
        )
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = Vec<Option<Value>>> + '_ {
        (0..self.rows).map(move |index| {
            self.columns
                .iter()
                .map(move |column| column.value(index))
                .collect()
        })
    }
}
