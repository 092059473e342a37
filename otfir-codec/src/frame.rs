//! The leading frame record of an IR stream.

use crate::error::Result;
use crate::wire::{Reader, put_str};

/// Frame record at the front of every serialized IR stream.
///
/// # Wire Format
/// ```text
/// +0: irVersion  (u16, little-endian)
/// +2: package    (u8 len + bytes)
/// ```
/// Encoded size is `3 + ` the package length. The frame appears exactly
/// once, at offset 0; the token stream starts immediately after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Version of the IR format itself.
    pub ir_version: u16,
    /// Schema package name.
    pub package: &'a str,
}

impl<'a> Frame<'a> {
    /// Decodes the frame at `offset`.
    ///
    /// # Errors
    /// Returns [`CodecError::BufferTooShort`](crate::CodecError::BufferTooShort)
    /// if the record runs past the buffer, or
    /// [`CodecError::InvalidUtf8`](crate::CodecError::InvalidUtf8) for a
    /// malformed package name.
    pub fn decode_at(buffer: &'a [u8], offset: usize) -> Result<Self> {
        let mut r = Reader::new(buffer, offset);
        let ir_version = r.u16_le()?;
        let package = r.str_field()?;
        Ok(Self {
            ir_version,
            package,
        })
    }

    /// Bytes this frame occupies on the wire.
    #[must_use]
    pub fn encoded_size(&self) -> usize {
        3 + self.package.len()
    }

    /// Appends the wire form of this frame to `out`.
    ///
    /// # Errors
    /// Returns [`CodecError::StringTooLong`](crate::CodecError::StringTooLong)
    /// if the package name exceeds 255 bytes.
    pub fn encode_into(&self, out: &mut Vec<u8>) -> Result<()> {
        out.extend_from_slice(&self.ir_version.to_le_bytes());
        put_str(out, "package", self.package)?;
        Ok(())
    }
}
