//! # otfir-catalog
//!
//! Loads a serialized SBE IR file and builds the schema catalog an
//! on-the-fly decoder works from.
//!
//! This crate provides:
//! - [`load`] - one-shot file load into a [`Catalog`]
//! - [`Catalog`] - header fragment plus message fragments keyed by schema id
//! - [`Fragment`] - a zero-copy view over one structural unit of the IR
//! - [`scanner`] - token-stream span scanning
//! - [`buffer`] - raw IR buffer loading
//!
//! The stream layout is one [`Frame`](otfir_codec::Frame) record, the
//! message-header composite, then message token sequences back to back
//! until end of file. A load walks that once, records each span, and never
//! touches the buffer again.
//!
//! ```no_run
//! let catalog = otfir_catalog::load("schema.sbeir")?;
//! let quote = catalog.message(2)?;
//! for token in quote.tokens() {
//!     let token = token?;
//!     println!("{:?} {}", token.signal, token.name);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod buffer;
pub mod catalog;
pub mod error;
pub mod fragment;
pub mod scanner;

pub use catalog::{Catalog, load};
pub use error::{LoadError, UnknownMessageError};
pub use fragment::{Fragment, Span, Tokens};
pub use scanner::{BeginInfo, ScanMode, ScanOutcome, scan_span};
