//! Command-line interface.

use std::path::PathBuf;

use bytes::Bytes;
use clap::{Parser, Subcommand};

use crate::binary::{scan, Cursor, Header};
use crate::frame::{Frame, Schema};

/// Decode PostgreSQL binary COPY files into typed columns.
#[derive(Parser, Debug)]
#[command(name = "pgframe", version)]
pub struct Cli {
    /// Subcommand.
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Decode a file and print its rows.
    Show {
        /// Binary COPY file.
        file: PathBuf,

        /// Column types, e.g. "id:integer,name:varchar".
        #[arg(
            short,
            long,
            value_parser = Schema::parse,
            required_unless_present = "schema_file"
        )]
        schema: Option<Schema>,

        /// TOML schema file with [[column]] entries.
        #[arg(long, conflicts_with = "schema")]
        schema_file: Option<PathBuf>,

        /// Print at most this many rows.
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print rows as a JSON array of objects.
        #[arg(short, long)]
        json: bool,
    },

    /// Validate a file's structure without decoding values.
    Verify {
        /// Binary COPY file.
        file: PathBuf,
    },
}

/// Decode a file and print it, tab-separated or as JSON.
#[allow(clippy::print_stdout)]
pub fn show(
    file: PathBuf,
    schema: Option<Schema>,
    schema_file: Option<PathBuf>,
    limit: Option<usize>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let schema = match (schema, schema_file) {
        (Some(schema), _) => schema,
        (None, Some(path)) => Schema::load(path)?,
        (None, None) => return Err("--schema or --schema-file is required".into()),
    };

    let frame = Frame::load(&file, &schema)?;
    let limit = limit.unwrap_or(frame.rows());

    if json {
        let rows = frame
            .iter_rows()
            .take(limit)
            .map(|row| {
                frame
                    .schema()
                    .columns()
                    .iter()
                    .zip(row)
                    .map(|(def, value)| Ok((def.name().to_string(), serde_json::to_value(value)?)))
                    .collect::<Result<serde_json::Map<String, serde_json::Value>, serde_json::Error>>()
                    .map(serde_json::Value::Object)
            })
            .collect::<Result<Vec<_>, _>>()?;

        println!("{}", serde_json::Value::Array(rows));
    } else {
        let names: Vec<&str> = frame
            .schema()
            .columns()
            .iter()
            .map(|def| def.name())
            .collect();
        println!("{}", names.join("\t"));

        for row in frame.iter_rows().take(limit) {
            let cells: Vec<String> = row
                .iter()
                .map(|value| match value {
                    Some(value) => value.to_string(),
                    None => "NULL".to_string(),
                })
                .collect();
            println!("{}", cells.join("\t"));
        }
    }

    Ok(())
}

/// Check the header and walk every tuple, reporting the structure.
/// No values are decoded, so no schema is needed.
#[allow(clippy::print_stdout)]
pub fn verify(file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let buffer = std::fs::read(&file)?;
    let size = buffer.len();

    let mut cursor = Cursor::new(Bytes::from(buffer));
    let header = Header::read(&mut cursor)?;
    let raw = scan(&mut cursor, None)?;

    println!("file: {}", file.display());
    println!("size: {} bytes", size);
    println!("flags: 0x{:08x}", header.flags);
    println!("extension: {} bytes", header.extension);
    println!("columns: {}", raw.columns());
    println!("rows: {}", raw.rows());

    for (index, cells) in raw.iter().enumerate() {
        let nulls = cells.iter().filter(|cell| cell.is_null()).count();
        println!("column {}: {} null(s)", index, nulls);
    }

    Ok(())
}
