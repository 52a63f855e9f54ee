//! Raw cell payload, as cut out of a COPY stream.

use std::ops::Deref;

use bytes::Bytes;

/// One field of one tuple: the raw bytes and the NULL marker.
/// The bytes are a ref-counted slice of the input buffer, never a copy.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Data {
    pub data: Bytes,
    pub is_null: bool,
}

impl Deref for Data {
    type Target = Bytes;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<Bytes> for Data {
    fn from(value: Bytes) -> Self {
        Self {
            data: value,
            is_null: false,
        }
    }
}

impl Data {
    /// NULL cell. Carries no bytes.
    pub fn null() -> Self {
        Self {
            data: Bytes::new(),
            is_null: true,
        }
    }

    pub fn is_null(&self) -> bool {
        self.is_null
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_null_is_empty() {
        let null = Data::null();
        assert!(null.is_null());
        assert!(null.data.is_empty());

        let data = Data::from(Bytes::from_static(b"\x00\x2a"));
        assert!(!data.is_null());
        assert_eq!(data.len(), 2);
    }
}
