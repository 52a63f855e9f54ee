use bytes::Buf;

use super::*;

impl FromField for f32 {
    fn from_field(bytes: &[u8]) -> Result<Self, Error> {
        // PostgreSQL float4 is 4 bytes in network byte order (big-endian).
        if bytes.len() != 4 {
            return Err(Error::LengthMismatch(4, bytes.len()));
        }

        let mut buf = bytes;
        let bits = buf.get_u32();
        Ok(f32::from_bits(bits))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_real() {
        let val = f32::from_field(&1.25_f32.to_be_bytes()).unwrap();
        assert_eq!(val, 1.25);

        let neg = f32::from_field(&(-0.5_f32).to_be_bytes()).unwrap();
        assert_eq!(neg, -0.5);
    }

    #[test]
    fn test_real_nan_bits_survive() {
        let nan = f32::from_field(&f32::NAN.to_be_bytes()).unwrap();
        assert!(nan.is_nan());

        let inf = f32::from_field(&f32::INFINITY.to_be_bytes()).unwrap();
        assert!(inf.is_infinite());
    }

    #[test]
    fn test_real_rejects_double_width() {
        let err = f32::from_field(&1.0_f64.to_be_bytes()).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch(4, 8)));
    }
}
