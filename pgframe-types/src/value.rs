//! Typed scalar values.

use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Serializer};

use crate::DataType;

/// One decoded cell. Used for point access and output; decoded columns
/// store native values directly, not `Value`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Smallint(i16),
    Integer(i32),
    Bigint(i64),
    Real(f32),
    Double(f64),
    Boolean(bool),
    Varchar(String),
}

impl Value {
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Smallint(_) => DataType::Smallint,
            Value::Integer(_) => DataType::Integer,
            Value::Bigint(_) => DataType::Bigint,
            Value::Real(_) => DataType::Real,
            Value::Double(_) => DataType::Double,
            Value::Boolean(_) => DataType::Boolean,
            Value::Varchar(_) => DataType::Varchar,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Smallint(v) => write!(f, "{}", v),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Bigint(v) => write!(f, "{}", v),
            Value::Real(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Varchar(v) => write!(f, "{}", v),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Smallint(v) => serializer.serialize_i16(*v),
            Value::Integer(v) => serializer.serialize_i32(*v),
            Value::Bigint(v) => serializer.serialize_i64(*v),
            Value::Real(v) => serializer.serialize_f32(*v),
            Value::Double(v) => serializer.serialize_f64(*v),
            Value::Boolean(v) => serializer.serialize_bool(*v),
            Value::Varchar(v) => serializer.serialize_str(v),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::Integer(42).to_string(), "42");
        assert_eq!(Value::Boolean(false).to_string(), "false");
        assert_eq!(Value::Varchar("Some cool data".into()).to_string(), "Some cool data");
    }

    #[test]
    fn test_data_type() {
        assert_eq!(Value::Bigint(1).data_type(), DataType::Bigint);
        assert_eq!(Value::Real(1.0).data_type(), DataType::Real);
    }
}
