//! # otfir-codec
//!
//! Wire codecs for the serialized SBE IR format.
//!
//! This crate provides:
//! - [`Frame`] - the package-name record leading every IR stream
//! - [`Token`] - the fixed-prefix, self-sizing schema token record
//! - [`Signal`] - the closed set of structural token kinds
//! - [`TokenCursor`] - the decode seam the catalog's span scanner walks
//!
//! All records decode zero-copy: string fields borrow from the buffer.

pub mod error;
pub mod frame;
pub mod signal;
pub mod token;

mod wire;

pub use error::{CodecError, Result};
pub use frame::Frame;
pub use signal::Signal;
pub use token::{Token, TokenCursor};
