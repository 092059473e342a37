//! Span scanning over the IR token stream.
//!
//! The scanner walks fixed-format tokens from a starting offset and
//! accumulates their encoded sizes until the mode's end signal appears. It
//! is the only component that steps through the stream; everything else
//! works with the spans it reports.

use crate::error::LoadError;
use otfir_codec::{CodecError, Signal, TokenCursor};

/// Which structural unit a scan delimits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// The shared message-header composite, delimited by
    /// BeginComposite/EndComposite.
    Header,
    /// One message definition, delimited by BeginMessage/EndMessage.
    Message,
}

impl ScanMode {
    /// Opening signal of this mode.
    #[must_use]
    pub fn begin(self) -> Signal {
        match self {
            Self::Header => Signal::BeginComposite,
            Self::Message => Signal::BeginMessage,
        }
    }

    /// Terminating signal of this mode.
    #[must_use]
    pub fn end(self) -> Signal {
        match self {
            Self::Header => Signal::EndComposite,
            Self::Message => Signal::EndMessage,
        }
    }
}

/// Fields captured from the last begin token a scan saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeginInfo {
    /// Element name.
    pub name: String,
    /// Message schema id. Meaningful in message mode only.
    pub schema_id: u16,
    /// Schema version.
    pub version: u16,
}

/// Result of one completed span scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Total bytes consumed, terminator token included.
    pub length: usize,
    /// The mode's begin token, if one appeared in the span.
    pub begin: Option<BeginInfo>,
}

/// Consumes tokens from `offset` until the first end signal of `mode`.
///
/// The span length includes every consumed token, the terminator too. The
/// scan stops on the **first** matching end signal with no nesting-depth
/// tracking: a composite of the same kind nested inside the span would
/// terminate it early. The serialized IR keeps the header and each message
/// flat with respect to their own begin/end kind, so the scan has no depth
/// counter.
///
/// # Errors
/// - [`LoadError::TruncatedStream`] if the buffer ends (or a token record
///   runs past it) before the end signal.
/// - [`LoadError::Codec`] for any other malformed token.
pub fn scan_span<'a, T: TokenCursor<'a>>(
    buffer: &'a [u8],
    offset: usize,
    mode: ScanMode,
) -> Result<ScanOutcome, LoadError> {
    let mut consumed = 0;
    let mut begin = None;

    while offset + consumed < buffer.len() {
        let at = offset + consumed;
        let token = T::decode_at(buffer, at).map_err(|source| match source {
            CodecError::BufferTooShort { .. } => LoadError::TruncatedStream {
                offset,
                expected: mode.end(),
            },
            source => LoadError::Codec { offset: at, source },
        })?;
        consumed += token.encoded_size();

        if token.signal() == mode.begin() {
            tracing::debug!(
                name = token.name(),
                schema_id = token.schema_id(),
                version = token.version(),
                offset = at,
                "span begin"
            );
            begin = Some(BeginInfo {
                name: token.name().to_string(),
                schema_id: token.schema_id(),
                version: token.version(),
            });
        }

        if token.signal() == mode.end() {
            return Ok(ScanOutcome {
                length: consumed,
                begin,
            });
        }
    }

    Err(LoadError::TruncatedStream {
        offset,
        expected: mode.end(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use otfir_codec::{Result as CodecResult, Token};

    /// Fixed-size stand-in cursor: each record is one byte holding a raw
    /// signal code. Exercises the scan logic apart from the wire codec.
    struct ByteCursor {
        signal: Signal,
    }

    impl<'a> TokenCursor<'a> for ByteCursor {
        fn decode_at(buffer: &'a [u8], offset: usize) -> CodecResult<Self> {
            Ok(Self {
                signal: Signal::from_wire(buffer[offset], offset)?,
            })
        }

        fn encoded_size(&self) -> usize {
            1
        }

        fn signal(&self) -> Signal {
            self.signal
        }

        fn name(&self) -> &'a str {
            ""
        }

        fn schema_id(&self) -> u16 {
            42
        }

        fn version(&self) -> u16 {
            0
        }
    }

    fn sig(signals: &[Signal]) -> Vec<u8> {
        signals.iter().map(|&s| s as u8).collect()
    }

    #[test]
    fn test_scan_stops_at_end_signal() {
        let stream = sig(&[
            Signal::BeginComposite,
            Signal::Encoding,
            Signal::Encoding,
            Signal::EndComposite,
            Signal::BeginMessage,
        ]);
        let outcome = scan_span::<ByteCursor>(&stream, 0, ScanMode::Header).unwrap();
        assert_eq!(outcome.length, 4);
        assert_eq!(outcome.begin.unwrap().name, "");
    }

    #[test]
    fn test_scan_from_nonzero_offset() {
        let stream = sig(&[
            Signal::EndComposite,
            Signal::BeginMessage,
            Signal::BeginField,
            Signal::EndField,
            Signal::EndMessage,
        ]);
        let outcome = scan_span::<ByteCursor>(&stream, 1, ScanMode::Message).unwrap();
        assert_eq!(outcome.length, 4);
        assert_eq!(outcome.begin.unwrap().schema_id, 42);
    }

    #[test]
    fn test_scan_ignores_other_end_kinds() {
        // A composite closing inside a message must not end the message span.
        let stream = sig(&[
            Signal::BeginMessage,
            Signal::BeginComposite,
            Signal::EndComposite,
            Signal::EndMessage,
        ]);
        let outcome = scan_span::<ByteCursor>(&stream, 0, ScanMode::Message).unwrap();
        assert_eq!(outcome.length, 4);
    }

    #[test]
    fn test_scan_without_begin_reports_none() {
        let stream = sig(&[Signal::Encoding, Signal::EndMessage]);
        let outcome = scan_span::<ByteCursor>(&stream, 0, ScanMode::Message).unwrap();
        assert!(outcome.begin.is_none());
    }

    #[test]
    fn test_exhaustion_is_truncated_stream() {
        let stream = sig(&[Signal::BeginMessage, Signal::BeginField, Signal::EndField]);
        let err = scan_span::<ByteCursor>(&stream, 0, ScanMode::Message).unwrap_err();
        assert!(matches!(
            err,
            LoadError::TruncatedStream {
                offset: 0,
                expected: Signal::EndMessage,
            }
        ));
    }

    // Known limitation: a scan ends at the FIRST end signal of its kind. A
    // composite of the same kind nested before the outer one closes would
    // cut the span short. The serialized IR does not nest composites within
    // the header composite, so this does not occur in practice.
    #[test]
    fn test_nested_same_kind_composite_terminates_early() {
        let stream = sig(&[
            Signal::BeginComposite,
            Signal::BeginComposite,
            Signal::EndComposite, // inner close ends the scan here
            Signal::EndComposite,
        ]);
        let outcome = scan_span::<ByteCursor>(&stream, 0, ScanMode::Header).unwrap();
        assert_eq!(outcome.length, 3);
    }

    #[test]
    fn test_real_token_record_truncation() {
        // A real token cut mid-record maps BufferTooShort to TruncatedStream.
        let mut stream = Vec::new();
        let mut begin = Token::bare(Signal::BeginMessage);
        begin.schema_id = 3;
        begin.name = "Quote";
        begin.encode_into(&mut stream).unwrap();
        Token::bare(Signal::Encoding)
            .encode_into(&mut stream)
            .unwrap();
        stream.truncate(stream.len() - 2);

        let err = scan_span::<Token>(&stream, 0, ScanMode::Message).unwrap_err();
        assert!(matches!(err, LoadError::TruncatedStream { .. }));
    }

    #[test]
    fn test_real_token_length_includes_terminator() {
        let mut stream = Vec::new();
        let mut begin = Token::bare(Signal::BeginMessage);
        begin.schema_id = 3;
        begin.version = 1;
        begin.name = "Quote";
        begin.encode_into(&mut stream).unwrap();
        Token::bare(Signal::EndMessage)
            .encode_into(&mut stream)
            .unwrap();

        let outcome = scan_span::<Token>(&stream, 0, ScanMode::Message).unwrap();
        assert_eq!(outcome.length, stream.len());
        let begin = outcome.begin.unwrap();
        assert_eq!(begin.name, "Quote");
        assert_eq!(begin.schema_id, 3);
        assert_eq!(begin.version, 1);
    }
}
