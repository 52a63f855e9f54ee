use super::*;

impl FromField for String {
    fn from_field(bytes: &[u8]) -> Result<Self, Error> {
        // Text payloads are raw bytes, no terminator. UTF-8 only.
        Ok(std::str::from_utf8(bytes)?.to_string())
    }
}
