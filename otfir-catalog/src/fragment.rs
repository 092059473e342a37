//! Spans and schema fragments over the loaded IR buffer.

use crate::error::LoadError;
use bytes::Bytes;
use otfir_codec::{CodecError, Token};

/// A contiguous byte range `[offset, offset + length)` within the IR buffer.
///
/// Spans replace raw pointer arithmetic: every span is bounds-checked
/// against the buffer before a [`Fragment`] is built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start offset within the buffer.
    pub offset: usize,
    /// Length in bytes.
    pub length: usize,
}

impl Span {
    /// Creates a span at `offset` covering `length` bytes.
    #[must_use]
    pub const fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Exclusive end offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// One structural unit of the schema: the shared header composite or one
/// message's token sequence.
///
/// A fragment is a refcounted view into the loaded buffer, not a copy; the
/// buffer stays alive as long as any fragment (or the catalog) holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    bytes: Bytes,
    offset: usize,
}

impl Fragment {
    /// Builds a fragment for `span` within `buffer`.
    ///
    /// # Errors
    /// Returns [`LoadError::SpanOutOfBounds`] if the span does not lie
    /// entirely within the buffer.
    pub fn new(buffer: &Bytes, span: Span) -> Result<Self, LoadError> {
        let end = span.offset.checked_add(span.length);
        match end {
            Some(end) if end <= buffer.len() => Ok(Self {
                bytes: buffer.slice(span.offset..end),
                offset: span.offset,
            }),
            _ => Err(LoadError::SpanOutOfBounds {
                offset: span.offset,
                length: span.length,
                buffer_len: buffer.len(),
            }),
        }
    }

    /// The fragment's bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the fragment is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Start offset within the loaded IR buffer.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The span this fragment covers in the loaded IR buffer.
    #[must_use]
    pub fn span(&self) -> Span {
        Span::new(self.offset, self.bytes.len())
    }

    /// Iterates the fragment's tokens in stream order.
    ///
    /// This is what an on-the-fly decoder walks when interpreting a live
    /// message against this fragment's layout.
    #[must_use]
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens {
            buffer: &self.bytes,
            pos: 0,
        }
    }
}

/// Iterator over the tokens of one fragment.
///
/// Stops after the first decode error; a fragment produced by a successful
/// load always decodes cleanly, so an error here means the caller built the
/// fragment from foreign bytes.
pub struct Tokens<'a> {
    buffer: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token<'a>, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.buffer.len() {
            return None;
        }
        match Token::decode_at(self.buffer, self.pos) {
            Ok(token) => {
                self.pos += token.encoded_size();
                Some(Ok(token))
            }
            Err(e) => {
                self.pos = self.buffer.len();
                Some(Err(e))
            }
        }
    }
}
