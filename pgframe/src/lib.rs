//! Decode PostgreSQL binary COPY streams into typed, named, nullable
//! columns.
//!
//! The stream is parsed in one forward pass: the header is validated,
//! every field of every tuple is located as a zero-copy slice, and
//! each column's payloads are decoded against a caller-declared
//! schema, in parallel across columns.

pub mod binary;
pub mod cli;
pub mod frame;

pub use frame::{Column, ColumnDef, Frame, Schema};
pub use pgframe_types::{Data, DataType, Value};
