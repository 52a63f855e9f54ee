use bytes::Buf;

use super::*;

impl FromField for i16 {
    fn from_field(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != 2 {
            return Err(Error::LengthMismatch(2, bytes.len()));
        }

        let mut buf = bytes;
        Ok(buf.get_i16())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_smallint() {
        assert_eq!(i16::from_field(&25_i16.to_be_bytes()).unwrap(), 25);
        assert_eq!(i16::from_field(&(-1_i16).to_be_bytes()).unwrap(), -1);
        assert_eq!(i16::from_field(&i16::MIN.to_be_bytes()).unwrap(), i16::MIN);
    }

    #[test]
    fn test_wrong_width() {
        let err = i16::from_field(&42_i32.to_be_bytes()).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch(2, 4)));
    }
}
