//! Declared column types.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize, de, de::Visitor};

use crate::Error;

/// Target type for a column's binary payloads. Declared by the caller,
/// never inferred from the stream.
#[derive(Serialize, PartialEq, Debug, Clone, Copy, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Smallint,
    Integer,
    Bigint,
    Real,
    Double,
    Boolean,
    Varchar,
}

impl DataType {
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Smallint => "smallint",
            DataType::Integer => "integer",
            DataType::Bigint => "bigint",
            DataType::Real => "real",
            DataType::Double => "double",
            DataType::Boolean => "boolean",
            DataType::Varchar => "varchar",
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = Error;

    // Canonical names plus the shorthand accepted in schema strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "smallint" | "i16" => DataType::Smallint,
            "integer" | "i32" => DataType::Integer,
            "bigint" | "i64" => DataType::Bigint,
            "real" | "f32" => DataType::Real,
            "double" | "f64" => DataType::Double,
            "boolean" | "bool" => DataType::Boolean,
            "varchar" | "str" | "string" | "text" => DataType::Varchar,
            _ => return Err(Error::UnknownType(s.into())),
        })
    }
}

struct DataTypeVisitor;

impl<'de> Visitor<'de> for DataTypeVisitor {
    type Value = DataType;

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse().map_err(de::Error::custom)
    }

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("expected a data type name")
    }
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(DataTypeVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_canonical_names() {
        for name in [
            "smallint", "integer", "bigint", "real", "double", "boolean", "varchar",
        ] {
            let data_type: DataType = name.parse().unwrap();
            assert_eq!(data_type.to_string(), name);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("str".parse::<DataType>().unwrap(), DataType::Varchar);
        assert_eq!("string".parse::<DataType>().unwrap(), DataType::Varchar);
        assert_eq!("text".parse::<DataType>().unwrap(), DataType::Varchar);
        assert_eq!("i16".parse::<DataType>().unwrap(), DataType::Smallint);
        assert_eq!("i32".parse::<DataType>().unwrap(), DataType::Integer);
        assert_eq!("i64".parse::<DataType>().unwrap(), DataType::Bigint);
        assert_eq!("f32".parse::<DataType>().unwrap(), DataType::Real);
        assert_eq!("f64".parse::<DataType>().unwrap(), DataType::Double);
        assert_eq!("bool".parse::<DataType>().unwrap(), DataType::Boolean);
    }

    #[test]
    fn test_unknown_name() {
        let err = "uuid".parse::<DataType>().unwrap_err();
        assert!(matches!(err, Error::UnknownType(name) if name == "uuid"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!("Integer".parse::<DataType>().is_err());
    }
}
