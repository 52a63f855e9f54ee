use super::Error;
use super::FromField;

impl FromField for bool {
    fn from_field(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != 1 {
            return Err(Error::LengthMismatch(1, bytes.len()));
        }

        // Servers write 0 or 1; any nonzero byte reads as true.
        Ok(bytes[0] != 0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bool() {
        assert!(!bool::from_field(&[0]).unwrap());
        assert!(bool::from_field(&[1]).unwrap());
    }

    #[test]
    fn test_nonzero_is_true() {
        assert!(bool::from_field(&[2]).unwrap());
        assert!(bool::from_field(&[255]).unwrap());
    }

    #[test]
    fn test_empty_is_not_bool() {
        let err = bool::from_field(&[]).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch(1, 0)));
    }
}
