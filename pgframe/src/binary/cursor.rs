//! Checked reads over an in-memory stream.

use bytes::{Buf, Bytes};

use super::Error;

/// Read position over an immutable buffer. Every read advances by
/// exactly the requested width or fails without consuming anything.
#[derive(Debug, Clone)]
pub struct Cursor {
    buffer: Bytes,
}

impl Cursor {
    pub fn new(buffer: Bytes) -> Self {
        Self { buffer }
    }

    pub fn remaining(&self) -> usize {
        self.buffer.remaining()
    }

    pub fn get_i16(&mut self) -> Result<i16, Error> {
        if self.buffer.remaining() < 2 {
            return Err(Error::TruncatedStream);
        }

        Ok(self.buffer.get_i16())
    }

    pub fn get_i32(&mut self) -> Result<i32, Error> {
        if self.buffer.remaining() < 4 {
            return Err(Error::TruncatedStream);
        }

        Ok(self.buffer.get_i32())
    }

    pub fn get_u32(&mut self) -> Result<u32, Error> {
        if self.buffer.remaining() < 4 {
            return Err(Error::TruncatedStream);
        }

        Ok(self.buffer.get_u32())
    }

    /// Next `len` bytes as a ref-counted slice of the underlying
    /// buffer. No copy.
    pub fn take(&mut self, len: usize) -> Result<Bytes, Error> {
        if self.buffer.remaining() < len {
            return Err(Error::TruncatedStream);
        }

        Ok(self.buffer.split_to(len))
    }

    pub fn skip(&mut self, len: usize) -> Result<(), Error> {
        if self.buffer.remaining() < len {
            return Err(Error::TruncatedStream);
        }

        self.buffer.advance(len);
        Ok(())
    }
}

impl From<Bytes> for Cursor {
    fn from(buffer: Bytes) -> Self {
        Self::new(buffer)
    }
}
