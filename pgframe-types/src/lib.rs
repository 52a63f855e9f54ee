//! Declared column types for PostgreSQL binary COPY data and the
//! decoding of single fields into native values.

pub mod bigint;
pub mod bool;
pub mod data;
pub mod data_type;
pub mod double;
pub mod error;
pub mod integer;
pub mod interface;
pub mod real;
pub mod smallint;
pub mod text;
pub mod value;

pub use data::Data;
pub use data_type::DataType;
pub use error::Error;
pub use interface::FromField;
pub use value::Value;
