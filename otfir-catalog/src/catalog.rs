//! Catalog construction and lookup.
//!
//! One load walks the IR stream end to end: frame, then the header
//! composite span, then message spans until the buffer is exhausted. The
//! resulting [`Catalog`] is immutable and indexes every message's layout
//! fragment by schema id.

use crate::buffer::read_ir_file;
use crate::error::{LoadError, UnknownMessageError};
use crate::fragment::{Fragment, Span};
use crate::scanner::{ScanMode, scan_span};
use bytes::Bytes;
use otfir_codec::{Frame, Token};
use std::collections::HashMap;
use std::path::Path;

/// Loads the IR file at `path` into a catalog.
///
/// # Errors
/// Returns [`LoadError`] if the file cannot be read in full or its token
/// stream is not structurally well formed.
pub fn load(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
    let buffer = read_ir_file(path.as_ref())?;
    Catalog::from_buffer(buffer)
}

/// The complete set of schema fragments produced by one load.
///
/// Owns the IR buffer (via `Bytes`); fragments are views into it. Immutable
/// after construction, so shared read access from any number of threads is
/// fine.
#[derive(Debug, Clone)]
pub struct Catalog {
    package: String,
    ir_version: u16,
    header: Fragment,
    messages: HashMap<u16, Fragment>,
}

impl Catalog {
    /// Builds a catalog from an already-loaded IR buffer.
    ///
    /// The stream must hold one frame, one header composite, and zero or
    /// more messages that together reach the end of the buffer exactly.
    ///
    /// # Errors
    /// Returns [`LoadError`] on a malformed frame, a truncated span, or a
    /// message span with no BeginMessage token to key it by.
    pub fn from_buffer(buffer: Bytes) -> Result<Self, LoadError> {
        let frame = Frame::decode_at(&buffer, 0)
            .map_err(|source| LoadError::Codec { offset: 0, source })?;
        tracing::info!(
            package = frame.package,
            ir_version = frame.ir_version,
            "reading IR"
        );
        let mut offset = frame.encoded_size();

        // Header composite comes first, exactly once.
        let outcome = scan_span::<Token>(&buffer, offset, ScanMode::Header)?;
        let header = Fragment::new(&buffer, Span::new(offset, outcome.length))?;
        tracing::debug!(
            name = outcome.begin.as_ref().map(|b| b.name.as_str()),
            length = outcome.length,
            "header span"
        );
        offset += outcome.length;

        let mut messages = HashMap::new();
        while offset < buffer.len() {
            let outcome = scan_span::<Token>(&buffer, offset, ScanMode::Message)?;
            let begin = outcome.begin.ok_or_else(|| LoadError::InvalidStructure {
                message: format!("message span at offset {offset} has no BeginMessage token"),
            })?;
            let fragment = Fragment::new(&buffer, Span::new(offset, outcome.length))?;
            tracing::debug!(
                name = begin.name.as_str(),
                schema_id = begin.schema_id,
                version = begin.version,
                length = outcome.length,
                "message span"
            );
            // Last write wins on a repeated id.
            if messages.insert(begin.schema_id, fragment).is_some() {
                tracing::warn!(
                    schema_id = begin.schema_id,
                    "duplicate message id, keeping the later definition"
                );
            }
            offset += outcome.length;
        }

        Ok(Self {
            package: frame.package.to_string(),
            ir_version: frame.ir_version,
            header,
            messages,
        })
    }

    /// Schema package name from the frame record.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Version of the IR format the stream was written with.
    #[must_use]
    pub fn ir_version(&self) -> u16 {
        self.ir_version
    }

    /// The shared message-header fragment.
    #[must_use]
    pub fn header(&self) -> &Fragment {
        &self.header
    }

    /// Looks up a message's layout fragment by schema id.
    ///
    /// # Errors
    /// Returns [`UnknownMessageError`] if no message with this id was in the
    /// stream.
    pub fn message(&self, id: u16) -> Result<&Fragment, UnknownMessageError> {
        self.messages.get(&id).ok_or(UnknownMessageError { id })
    }

    /// Number of messages in the catalog.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Iterates the registered message ids in no particular order.
    pub fn message_ids(&self) -> impl Iterator<Item = u16> + '_ {
        self.messages.keys().copied()
    }
}
