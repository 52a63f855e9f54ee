use crate::Error;

/// Decode one non-NULL binary field into a native value.
///
/// COPY binary payloads are big-endian; scalar types are fixed-width
/// and implementations check the width before reading.
pub trait FromField: Sized {
    fn from_field(bytes: &[u8]) -> Result<Self, Error>;
}
