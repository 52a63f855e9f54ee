//! Fixed COPY header: signature, flags, extension.

use super::{Cursor, Error};

/// Every binary COPY stream starts with these 11 bytes.
const SIGNATURE: [u8; 11] = *b"PGCOPY\n\xff\r\n\0";

/// Flags bit set when the stream carries the legacy per-field OIDs.
const HAS_OIDS: u32 = 0x0001_0000;

#[derive(Debug, Clone, Copy, Default)]
pub struct Header {
    pub flags: u32,
    pub extension: u32,
}

impl Header {
    /// Validate the fixed header and leave the cursor at the first
    /// tuple. The extension area is skipped, not interpreted.
    pub fn read(cursor: &mut Cursor) -> Result<Self, Error> {
        if cursor.remaining() < SIGNATURE.len() {
            return Err(Error::InvalidSignature);
        }

        let signature = cursor.take(SIGNATURE.len())?;
        if signature != SIGNATURE.as_slice() {
            return Err(Error::InvalidSignature);
        }

        let flags = cursor.get_u32()?;
        let extension = cursor.get_u32()?;
        cursor.skip(extension as usize)?;

        if flags & HAS_OIDS != 0 {
            return Err(Error::UnsupportedOids);
        }

        Ok(Self { flags, extension })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::binary::fixtures::make_binary_header;
    use bytes::Bytes;

    #[test]
    fn test_valid_header() {
        let mut cursor = Cursor::new(Bytes::from(make_binary_header()));
        let header = Header::read(&mut cursor).unwrap();
        assert_eq!(header.flags, 0);
        assert_eq!(header.extension, 0);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_bad_signature() {
        let mut data = make_binary_header();
        data[0] = b'X';
        let mut cursor = Cursor::new(Bytes::from(data));
        assert!(matches!(
            Header::read(&mut cursor),
            Err(Error::InvalidSignature)
        ));
    }

    #[test]
    fn test_short_buffer_is_not_a_copy_stream() {
        let mut cursor = Cursor::new(Bytes::from_static(b"PGCOP"));
        assert!(matches!(
            Header::read(&mut cursor),
            Err(Error::InvalidSignature)
        ));
    }

    #[test]
    fn test_truncated_flags() {
        let mut data = make_binary_header();
        data.truncate(11 + 2);
        let mut cursor = Cursor::new(Bytes::from(data));
        assert!(matches!(
            Header::read(&mut cursor),
            Err(Error::TruncatedStream)
        ));
    }

    #[test]
    fn test_oids_rejected() {
        let mut data = b"PGCOPY\n".to_vec();
        data.push(255);
        data.push(b'\r');
        data.push(b'\n');
        data.push(b'\0');
        data.extend(0x0001_0000_u32.to_be_bytes()); // flags with oid bit
        data.extend(0_u32.to_be_bytes()); // extension

        let mut cursor = Cursor::new(Bytes::from(data));
        assert!(matches!(
            Header::read(&mut cursor),
            Err(Error::UnsupportedOids)
        ));
    }

    #[test]
    fn test_other_flag_bits_ignored() {
        let mut data = b"PGCOPY\n".to_vec();
        data.push(255);
        data.push(b'\r');
        data.push(b'\n');
        data.push(b'\0');
        data.extend(0x8000_0001_u32.to_be_bytes());
        data.extend(0_u32.to_be_bytes());

        let mut cursor = Cursor::new(Bytes::from(data));
        let header = Header::read(&mut cursor).unwrap();
        assert_eq!(header.flags, 0x8000_0001);
    }

    #[test]
    fn test_extension_skipped() {
        let mut data = b"PGCOPY\n".to_vec();
        data.push(255);
        data.push(b'\r');
        data.push(b'\n');
        data.push(b'\0');
        data.extend(0_u32.to_be_bytes());
        data.extend(4_u32.to_be_bytes()); // extension length
        data.extend(b"\xde\xad\xbe\xef"); // extension area
        data.extend(7_i16.to_be_bytes()); // first tuple data

        let mut cursor = Cursor::new(Bytes::from(data));
        let header = Header::read(&mut cursor).unwrap();
        assert_eq!(header.extension, 4);
        // Cursor sits right after the extension.
        assert_eq!(cursor.get_i16().unwrap(), 7);
    }

    #[test]
    fn test_extension_longer_than_stream() {
        let mut data = b"PGCOPY\n".to_vec();
        data.push(255);
        data.push(b'\r');
        data.push(b'\n');
        data.push(b'\0');
        data.extend(0_u32.to_be_bytes());
        data.extend(16_u32.to_be_bytes());
        data.extend(b"\x00\x00"); // only 2 of the 16 bytes present

        let mut cursor = Cursor::new(Bytes::from(data));
        assert!(matches!(
            Header::read(&mut cursor),
            Err(Error::TruncatedStream)
        ));
    }
}
