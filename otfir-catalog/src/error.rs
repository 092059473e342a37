//! Error types for IR loading and catalog lookup.

use otfir_codec::{CodecError, Signal};
use std::path::PathBuf;
use thiserror::Error;

/// Error type for loading an IR file into a catalog.
///
/// A load either fully succeeds or the caller gets one of these; a partially
/// filled buffer or partially built catalog is never exposed. Nothing is
/// retried internally.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File size could not be queried.
    #[error("cannot stat IR file '{path}': {source}")]
    Size {
        /// Path that failed to stat.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// File could not be opened for reading.
    #[error("cannot open IR file '{path}': {source}")]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A read failed partway through the file.
    #[error("read failed after {filled} of {expected} bytes: {source}")]
    Read {
        /// Bytes the file was expected to hold.
        expected: usize,
        /// Bytes successfully read before the failure.
        filled: usize,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// End of stream before the expected number of bytes.
    #[error("short read: expected {expected} bytes, got {actual}")]
    ShortRead {
        /// Bytes the file was expected to hold.
        expected: usize,
        /// Bytes actually read.
        actual: usize,
    },

    /// Token stream ended before a structural terminator was found.
    #[error("token stream truncated: no {expected:?} before end of buffer (scan started at offset {offset})")]
    TruncatedStream {
        /// Offset the span scan started at.
        offset: usize,
        /// Terminating signal the scan was looking for.
        expected: Signal,
    },

    /// A record failed to decode.
    #[error("malformed record at offset {offset}: {source}")]
    Codec {
        /// Offset of the record that failed.
        offset: usize,
        /// Underlying codec error.
        source: CodecError,
    },

    /// A span fell outside the loaded buffer.
    #[error("span [{offset}, {offset}+{length}) out of bounds for buffer of {buffer_len} bytes")]
    SpanOutOfBounds {
        /// Span start offset.
        offset: usize,
        /// Span length in bytes.
        length: usize,
        /// Length of the loaded buffer.
        buffer_len: usize,
    },

    /// Stream is structurally invalid.
    #[error("invalid IR structure: {message}")]
    InvalidStructure {
        /// What was wrong.
        message: String,
    },
}

/// Lookup failure for a message id never registered in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown message id {id}")]
pub struct UnknownMessageError {
    /// The id that was looked up.
    pub id: u16,
}
