//! The serialized IR token record.
//!
//! A token is one fixed-prefix, self-sizing record in the IR stream. It
//! describes a schema element: a composite or message boundary, a field, an
//! enum value, or a primitive encoding. Tokens are decoded on demand and
//! never stored; the catalog layer only retains the byte spans they delimit.

use crate::error::Result;
use crate::signal::Signal;
use crate::wire::{Reader, put_str};

/// One IR token, borrowing its string fields from the underlying buffer.
///
/// # Wire Format
/// All integers little-endian; strings are one-byte length + bytes.
/// ```text
/// +0:  signal            (u8)
/// +1:  schemaId          (u16, meaningful on BeginMessage only)
/// +3:  version           (u16)
/// +5:  name              (u8 len + bytes)
///      constVal          (u8 len + bytes)
///      minVal            (u8 len + bytes)
///      maxVal            (u8 len + bytes)
///      nullVal           (u8 len + bytes)
///      characterEncoding (u8 len + bytes)
/// ```
/// The encoded size is `11 + ` the total string bytes, so every token
/// occupies at least 11 bytes and decoding always advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Structural kind of this token.
    pub signal: Signal,
    /// Message schema id. Zero by convention outside BeginMessage.
    pub schema_id: u16,
    /// Schema version this element was introduced in.
    pub version: u16,
    /// Element name.
    pub name: &'a str,
    /// Constant value constraint, empty if absent.
    pub const_val: &'a str,
    /// Minimum value constraint, empty if absent.
    pub min_val: &'a str,
    /// Maximum value constraint, empty if absent.
    pub max_val: &'a str,
    /// Null value constraint, empty if absent.
    pub null_val: &'a str,
    /// Character encoding name, empty if absent.
    pub character_encoding: &'a str,
}

/// Bytes of the fixed prefix before the string fields.
const FIXED_PREFIX: usize = 5;
/// One length byte per string field.
const STRING_FIELDS: usize = 6;

impl<'a> Token<'a> {
    /// Decodes the token at `offset`.
    ///
    /// # Errors
    /// Returns [`CodecError::BufferTooShort`](crate::CodecError::BufferTooShort)
    /// if the record runs past the buffer,
    /// [`CodecError::UnknownSignal`](crate::CodecError::UnknownSignal) for a
    /// signal byte outside the set, and
    /// [`CodecError::InvalidUtf8`](crate::CodecError::InvalidUtf8) for a
    /// malformed string field.
    pub fn decode_at(buffer: &'a [u8], offset: usize) -> Result<Self> {
        let mut r = Reader::new(buffer, offset);
        let signal = Signal::from_wire(r.u8()?, offset)?;
        let schema_id = r.u16_le()?;
        let version = r.u16_le()?;
        Ok(Self {
            signal,
            schema_id,
            version,
            name: r.str_field()?,
            const_val: r.str_field()?,
            min_val: r.str_field()?,
            max_val: r.str_field()?,
            null_val: r.str_field()?,
            character_encoding: r.str_field()?,
        })
    }

    /// Bytes this token occupies on the wire.
    #[must_use]
    pub fn encoded_size(&self) -> usize {
        FIXED_PREFIX
            + STRING_FIELDS
            + self.name.len()
            + self.const_val.len()
            + self.min_val.len()
            + self.max_val.len()
            + self.null_val.len()
            + self.character_encoding.len()
    }

    /// Appends the wire form of this token to `out`.
    ///
    /// # Errors
    /// Returns [`CodecError::StringTooLong`](crate::CodecError::StringTooLong)
    /// if any string field exceeds 255 bytes.
    pub fn encode_into(&self, out: &mut Vec<u8>) -> Result<()> {
        out.push(self.signal as u8);
        out.extend_from_slice(&self.schema_id.to_le_bytes());
        out.extend_from_slice(&self.version.to_le_bytes());
        put_str(out, "name", self.name)?;
        put_str(out, "constVal", self.const_val)?;
        put_str(out, "minVal", self.min_val)?;
        put_str(out, "maxVal", self.max_val)?;
        put_str(out, "nullVal", self.null_val)?;
        put_str(out, "characterEncoding", self.character_encoding)?;
        Ok(())
    }

    /// A token with empty string fields and zero id/version.
    #[must_use]
    pub fn bare(signal: Signal) -> Self {
        Self {
            signal,
            schema_id: 0,
            version: 0,
            name: "",
            const_val: "",
            min_val: "",
            max_val: "",
            null_val: "",
            character_encoding: "",
        }
    }
}

/// Narrow decode seam between the span scanner and the token wire layout.
///
/// The scanner only needs to step from record to record and look at the
/// structural fields; it never depends on how a token is laid out in bytes.
pub trait TokenCursor<'a>: Sized {
    /// Decodes one record at `offset`, reporting its own size via
    /// [`encoded_size`](Self::encoded_size).
    fn decode_at(buffer: &'a [u8], offset: usize) -> Result<Self>;

    /// Bytes this record occupies; always at least one, so a scan advances.
    fn encoded_size(&self) -> usize;

    /// Structural kind of this record.
    fn signal(&self) -> Signal;

    /// Element name.
    fn name(&self) -> &'a str;

    /// Message schema id.
    fn schema_id(&self) -> u16;

    /// Schema version.
    fn version(&self) -> u16;
}

impl<'a> TokenCursor<'a> for Token<'a> {
    fn decode_at(buffer: &'a [u8], offset: usize) -> Result<Self> {
        Token::decode_at(buffer, offset)
    }

    fn encoded_size(&self) -> usize {
        Token::encoded_size(self)
    }

    fn signal(&self) -> Signal {
        self.signal
    }

    fn name(&self) -> &'a str {
        self.name
    }

    fn schema_id(&self) -> u16 {
        self.schema_id
    }

    fn version(&self) -> u16 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    fn sample() -> Token<'static> {
        Token {
            signal: Signal::BeginMessage,
            schema_id: 7,
            version: 2,
            name: "NewOrderSingle",
            const_val: "",
            min_val: "0",
            max_val: "254",
            null_val: "255",
            character_encoding: "US-ASCII",
        }
    }

    #[test]
    fn test_round_trip() {
        let token = sample();
        let mut bytes = Vec::new();
        token.encode_into(&mut bytes).unwrap();
        assert_eq!(bytes.len(), token.encoded_size());

        let decoded = Token::decode_at(&bytes, 0).unwrap();
        assert_eq!(decoded, token);
        assert_eq!(decoded.encoded_size(), bytes.len());
    }

    #[test]
    fn test_decode_at_nonzero_offset() {
        let token = sample();
        let mut bytes = vec![0xAA, 0xBB, 0xCC];
        token.encode_into(&mut bytes).unwrap();

        let decoded = Token::decode_at(&bytes, 3).unwrap();
        assert_eq!(decoded.name, "NewOrderSingle");
        assert_eq!(decoded.schema_id, 7);
    }

    #[test]
    fn test_minimum_size_is_eleven() {
        let token = Token::bare(Signal::EndMessage);
        assert_eq!(token.encoded_size(), 11);
        let mut bytes = Vec::new();
        token.encode_into(&mut bytes).unwrap();
        assert_eq!(bytes.len(), 11);
    }

    #[test]
    fn test_truncated_record_rejected() {
        let token = sample();
        let mut bytes = Vec::new();
        token.encode_into(&mut bytes).unwrap();

        for cut in [0, 4, 10, bytes.len() - 1] {
            let err = Token::decode_at(&bytes[..cut], 0).unwrap_err();
            assert!(
                matches!(err, CodecError::BufferTooShort { .. }),
                "cut at {cut}: {err:?}"
            );
        }
    }

    #[test]
    fn test_bad_signal_rejected() {
        let mut bytes = Vec::new();
        sample().encode_into(&mut bytes).unwrap();
        bytes[0] = 99;
        assert!(matches!(
            Token::decode_at(&bytes, 0).unwrap_err(),
            CodecError::UnknownSignal { value: 99, offset: 0 }
        ));
    }

    #[test]
    fn test_bad_utf8_rejected() {
        let mut bytes = Vec::new();
        sample().encode_into(&mut bytes).unwrap();
        // First byte of the name payload.
        bytes[6] = 0xFF;
        assert!(matches!(
            Token::decode_at(&bytes, 0).unwrap_err(),
            CodecError::InvalidUtf8 { offset: 6 }
        ));
    }
}
