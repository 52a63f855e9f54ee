use bytes::Buf;

use super::*;

impl FromField for i32 {
    fn from_field(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != 4 {
            return Err(Error::LengthMismatch(4, bytes.len()));
        }

        let mut buf = bytes;
        Ok(buf.get_i32())
    }
}
