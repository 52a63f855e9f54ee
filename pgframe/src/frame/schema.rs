//! Declared shape of a stream: column types and names.
//!
//! The stream itself carries no type information, so the caller
//! declares it up front, either in code, as a spec string, or as a
//! TOML file.

use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use pgframe_types::DataType;
use serde::Deserialize;
use tracing::info;

use super::Error;

/// One declared column: target type plus display name.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    name: String,
    data_type: DataType,
}

impl ColumnDef {
    pub fn new(name: impl ToString, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }
}

/// Ordered column declarations for one stream. Stream columns are
/// matched by position, not name.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    columns: Vec<ColumnDef>,
}

// TOML document shape: one [[column]] table per column.
#[derive(Deserialize)]
struct SchemaFile {
    #[serde(default)]
    column: Vec<ColumnEntry>,
}

#[derive(Deserialize)]
struct ColumnEntry {
    name: Option<String>,
    data_type: DataType,
}

impl Schema {
    /// Schema with names defaulting to column indices.
    pub fn new(types: &[DataType]) -> Result<Self, Error> {
        if types.is_empty() {
            return Err(Error::EmptySchema);
        }

        Ok(Self {
            columns: types
                .iter()
                .enumerate()
                .map(|(index, data_type)| ColumnDef::new(index, *data_type))
                .collect(),
        })
    }

    /// Schema with explicit names. Lengths have to match.
    pub fn with_names(types: &[DataType], names: &[&str]) -> Result<Self, Error> {
        if names.len() != types.len() {
            return Err(Error::NameCount {
                names: names.len(),
                types: types.len(),
            });
        }
        if types.is_empty() {
            return Err(Error::EmptySchema);
        }

        Ok(Self {
            columns: names
                .iter()
                .zip(types)
                .map(|(name, data_type)| ColumnDef::new(name, *data_type))
                .collect(),
        })
    }

    /// Parse `"integer,varchar"` or `"id:integer,name:varchar"`.
    /// Entries without a name get their index. Unknown type names are
    /// collected and reported together.
    pub fn parse(spec: &str) -> Result<Self, Error> {
        if spec.trim().is_empty() {
            return Err(Error::EmptySchema);
        }

        let mut columns = Vec::new();
        let mut invalid = Vec::new();

        for (index, entry) in spec.split(',').enumerate() {
            let entry = entry.trim();
            let (name, type_name) = match entry.split_once(':') {
                Some((name, type_name)) => (name.trim().to_string(), type_name.trim()),
                None => (index.to_string(), entry),
            };

            match type_name.parse::<DataType>() {
                Ok(data_type) => columns.push(ColumnDef { name, data_type }),
                Err(_) => invalid.push(type_name.to_string()),
            }
        }

        if !invalid.is_empty() {
            return Err(Error::InvalidTypes(invalid));
        }

        Ok(Self { columns })
    }

    /// Parse a TOML document with one `[[column]]` table per column.
    pub fn from_toml(document: &str) -> Result<Self, Error> {
        let file: SchemaFile = toml::from_str(document)?;
        if file.column.is_empty() {
            return Err(Error::EmptySchema);
        }

        Ok(Self {
            columns: file
                .column
                .into_iter()
                .enumerate()
                .map(|(index, entry)| ColumnDef {
                    name: entry.name.unwrap_or_else(|| index.to_string()),
                    data_type: entry.data_type,
                })
                .collect(),
        })
    }

    /// Load a TOML schema file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let schema = Self::from_toml(&read_to_string(path)?)?;
        info!(
            "loaded schema \"{}\" ({} columns)",
            path.display(),
            schema.len()
        );
        Ok(schema)
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }
}

impl FromStr for Schema {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
