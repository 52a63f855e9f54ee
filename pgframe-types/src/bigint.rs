use bytes::Buf;

use super::*;

impl FromField for i64 {
    fn from_field(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != 8 {
            return Err(Error::LengthMismatch(8, bytes.len()));
        }

        let mut buf = bytes;
        Ok(buf.get_i64())
    }
}
