//! Error types for IR record codecs.

use thiserror::Error;

/// Error type for IR record encode/decode operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Buffer is too short for the requested record.
    #[error("buffer too short: required {required} bytes, available {available} bytes")]
    BufferTooShort {
        /// Required buffer size in bytes.
        required: usize,
        /// Available buffer size in bytes.
        available: usize,
    },

    /// Signal code is not part of the IR signal set.
    #[error("unknown signal code {value} at offset {offset}")]
    UnknownSignal {
        /// Raw signal byte found on the wire.
        value: u8,
        /// Byte offset of the signal byte.
        offset: usize,
    },

    /// Invalid UTF-8 in a string field.
    #[error("invalid UTF-8 at offset {offset}")]
    InvalidUtf8 {
        /// Byte offset where invalid UTF-8 was found.
        offset: usize,
    },

    /// String field exceeds the one-byte length prefix.
    #[error("{what} is {len} bytes, exceeds the 255 byte wire limit")]
    StringTooLong {
        /// Which field overflowed.
        what: &'static str,
        /// Actual length in bytes.
        len: usize,
    },
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
