use bytes::Buf;

use super::*;

impl FromField for f64 {
    fn from_field(bytes: &[u8]) -> Result<Self, Error> {
        // PostgreSQL float8 is 8 bytes in network byte order (big-endian).
        if bytes.len() != 8 {
            return Err(Error::LengthMismatch(8, bytes.len()));
        }

        let mut buf = bytes;
        let bits = buf.get_u64();
        Ok(f64::from_bits(bits))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_double() {
        let val = f64::from_field(&3.5_f64.to_be_bytes()).unwrap();
        assert_eq!(val, 3.5);

        let nan = f64::from_field(&f64::NAN.to_be_bytes()).unwrap();
        assert!(nan.is_nan());
    }
}
