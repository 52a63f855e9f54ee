//! Typed nullable columns.

use pgframe_types::{Data, DataType, Error, FromField, Value};

/// One decoded column, tuple order preserved. NULL cells are `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Smallint(Vec<Option<i16>>),
    Integer(Vec<Option<i32>>),
    Bigint(Vec<Option<i64>>),
    Real(Vec<Option<f32>>),
    Double(Vec<Option<f64>>),
    Boolean(Vec<Option<bool>>),
    Varchar(Vec<Option<String>>),
}

fn decode_cells<T: FromField>(cells: &[Data]) -> Result<Vec<Option<T>>, Error> {
    cells
        .iter()
        .map(|cell| {
            if cell.is_null() {
                Ok(None)
            } else {
                T::from_field(cell).map(Some)
            }
        })
        .collect()
}

impl Column {
    /// Decode one column's payloads against the declared type. NULLs
    /// pass through untouched; each payload is checked by the type's
    /// decoder.
    pub fn decode(cells: &[Data], data_type: DataType) -> Result<Self, Error> {
        Ok(match data_type {
            DataType::Smallint => Column::Smallint(decode_cells(cells)?),
            DataType::Integer => Column::Integer(decode_cells(cells)?),
            DataType::Bigint => Column::Bigint(decode_cells(cells)?),
            DataType::Real => Column::Real(decode_cells(cells)?),
            DataType::Double => Column::Double(decode_cells(cells)?),
            DataType::Boolean => Column::Boolean(decode_cells(cells)?),
            DataType::Varchar => Column::Varchar(decode_cells(cells)?),
        })
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Column::Smallint(_) => DataType::Smallint,
            Column::Integer(_) => DataType::Integer,
            Column::Bigint(_) => DataType::Bigint,
            Column::Real(_) => DataType::Real,
            Column::Double(_) => DataType::Double,
            Column::Boolean(_) => DataType::Boolean,
            Column::Varchar(_) => DataType::Varchar,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Smallint(cells) => cells.len(),
            Column::Integer(cells) => cells.len(),
            Column::Bigint(cells) => cells.len(),
            Column::Real(cells) => cells.len(),
            Column::Double(cells) => cells.len(),
            Column::Boolean(cells) => cells.len(),
            Column::Varchar(cells) => cells.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn null_count(&self) -> usize {
        match self {
            Column::Smallint(cells) => cells.iter().filter(|cell| cell.is_none()).count(),
            Column::Integer(cells) => cells.iter().filter(|cell| cell.is_none()).count(),
            Column::Bigint(cells) => cells.iter().filter(|cell| cell.is_none()).count(),
            Column::Real(cells) => cells.iter().filter(|cell| cell.is_none()).count(),
            Column::Double(cells) => cells.iter().filter(|cell| cell.is_none()).count(),
            Column::Boolean(cells) => cells.iter().filter(|cell| cell.is_none()).count(),
            Column::Varchar(cells) => cells.iter().filter(|cell| cell.is_none()).count(),
        }
    }

    /// Value at `row`. `None` for NULL cells and rows out of range.
    pub fn value(&self, row: usize) -> Option<Value> {
        match self {
            Column::Smallint(cells) => cells.get(row).copied()?.map(Value::Smallint),
            Column::Integer(cells) => cells.get(row).copied()?.map(Value::Integer),
            Column::Bigint(cells) => cells.get(row).copied()?.map(Value::Bigint),
            Column::Real(cells) => cells.get(row).copied()?.map(Value::Real),
            Column::Double(cells) => cells.get(row).copied()?.map(Value::Double),
            Column::Boolean(cells) => cells.get(row).copied()?.map(Value::Boolean),
            Column::Varchar(cells) => cells.get(row)?.clone().map(Value::Varchar),
        }
    }

    pub fn as_smallint(&self) -> Option<&[Option<i16>]> {
        match self {
            Column::Smallint(cells) => Some(cells),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&[Option<i32>]> {
        match self {
            Column::Integer(cells) => Some(cells),
            _ => None,
        }
    }

    pub fn as_bigint(&self) -> Option<&[Option<i64>]> {
        match self {
            Column::Bigint(cells) => Some(cells),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<&[Option<f32>]> {
        match self {
            Column::Real(cells) => Some(cells),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<&[Option<f64>]> {
        match self {
            Column::Double(cells) => Some(cells),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<&[Option<bool>]> {
        match self {
            Column::Boolean(cells) => Some(cells),
            _ => None,
        }
    }

    pub fn as_varchar(&self) -> Option<&[Option<String>]> {
        match self {
            Column::Varchar(cells) => Some(cells),
            _ => None,
        }
    }
}
