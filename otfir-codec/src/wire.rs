//! Cursor helpers for the fixed-prefix, length-prefixed IR wire layout.

use crate::error::{CodecError, Result};

/// Sequential reader over a byte buffer, bounds-checked on every access.
pub(crate) struct Reader<'a> {
    buffer: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buffer: &'a [u8], offset: usize) -> Self {
        Self {
            buffer,
            pos: offset,
        }
    }

    /// Current absolute position in the buffer.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    fn need(&self, n: usize) -> Result<()> {
        if self.pos + n > self.buffer.len() {
            return Err(CodecError::BufferTooShort {
                required: self.pos + n,
                available: self.buffer.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn u8(&mut self) -> Result<u8> {
        self.need(1)?;
        let v = self.buffer[self.pos];
        self.pos += 1;
        Ok(v)
    }

    pub(crate) fn u16_le(&mut self) -> Result<u16> {
        self.need(2)?;
        let v = u16::from_le_bytes([self.buffer[self.pos], self.buffer[self.pos + 1]]);
        self.pos += 2;
        Ok(v)
    }

    /// Reads a one-byte length prefix followed by that many UTF-8 bytes.
    pub(crate) fn str_field(&mut self) -> Result<&'a str> {
        let start = self.pos;
        let len = self.u8()? as usize;
        self.need(len)?;
        let bytes = &self.buffer[self.pos..self.pos + len];
        self.pos += len;
        std::str::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8 { offset: start + 1 })
    }
}

/// Appends a one-byte length prefix and the string bytes to `out`.
pub(crate) fn put_str(out: &mut Vec<u8>, what: &'static str, s: &str) -> Result<()> {
    let len = u8::try_from(s.len()).map_err(|_| CodecError::StringTooLong {
        what,
        len: s.len(),
    })?;
    out.push(len);
    out.extend_from_slice(s.as_bytes());
    Ok(())
}
