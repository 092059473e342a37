//! Raw IR buffer loading.
//!
//! Reads an entire IR file into one owned, immutable buffer. Everything
//! downstream references into that buffer by span instead of copying.

use crate::error::LoadError;
use bytes::Bytes;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

/// Reads the file at `path` into an owned buffer of exactly its stat'ed size.
///
/// # Errors
/// - [`LoadError::Size`] if the file cannot be stat'ed.
/// - [`LoadError::Open`] if it cannot be opened.
/// - [`LoadError::Read`] / [`LoadError::ShortRead`] if the contents cannot
///   be read in full.
pub fn read_ir_file(path: &Path) -> Result<Bytes, LoadError> {
    let expected = fs::metadata(path)
        .map_err(|source| LoadError::Size {
            path: path.to_path_buf(),
            source,
        })?
        .len() as usize;

    let mut file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let buffer = fill_exact(&mut file, expected)?;
    tracing::info!(path = %path.display(), len = expected, "loaded IR file");
    Ok(Bytes::from(buffer))
}

/// Reads exactly `expected` bytes from `reader`.
///
/// A single read may return fewer bytes than requested; the loop resumes
/// from the filled offset until the buffer is complete. `Interrupted` reads
/// are retried.
///
/// # Errors
/// - [`LoadError::ShortRead`] if the stream ends early.
/// - [`LoadError::Read`] if a read fails mid-stream.
pub fn fill_exact<R: Read>(reader: &mut R, expected: usize) -> Result<Vec<u8>, LoadError> {
    let mut buffer = vec![0u8; expected];
    let mut filled = 0;
    while filled < expected {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => {
                return Err(LoadError::ShortRead {
                    expected,
                    actual: filled,
                });
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(source) => {
                return Err(LoadError::Read {
                    expected,
                    filled,
                    source,
                });
            }
        }
    }
    Ok(buffer)
}
