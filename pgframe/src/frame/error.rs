//! Frame assembly errors.
//!
//! This is the only layer that touches the filesystem, so it is the
//! only one with an I/O variant. Format errors from the stream and
//! decode errors from the cells pass through unchanged.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Binary(#[from] crate::binary::Error),

    #[error("{0}")]
    Decode(#[from] pgframe_types::Error),

    #[error("invalid types found{}", type_list(.0))]
    InvalidTypes(Vec<String>),

    #[error("names and types must be same length ({names} != {types})")]
    NameCount { names: usize, types: usize },

    #[error("schema has no columns")]
    EmptySchema,

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Toml(#[from] toml::de::Error),
}

fn type_list(found: &[String]) -> String {
    if found.len() > 3 {
        format!(", including: {}", found[..3].join(", "))
    } else {
        format!(": {}", found.join(", "))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_invalid_types_lists_up_to_three() {
        let err = Error::InvalidTypes(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "invalid types found: a, b");

        let err = Error::InvalidTypes(vec!["a".into(), "b".into(), "c".into(), "d".into()]);
        assert_eq!(err.to_string(), "invalid types found, including: a, b, c");
    }
}
