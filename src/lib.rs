//! # tagbin
//!
//! A compact binary codec for tagged, self-describing tree documents
//! (the NBT wire format).
//!
//! - 12 fixed tag types covering signed integers, IEEE 754 floats, UTF-8
//!   strings, byte/int arrays, homogeneous lists, and named compounds
//! - Byte-exact, big-endian wire encoding shared by [`Writer`] and [`Reader`]
//! - Document envelope with transparent gzip detection in [`parse`]
//! - No `unsafe`, no panics on malformed input: every structural problem
//!   surfaces as an [`Error`]
//!
//! ## Quick start
//!
//! ```rust
//! use tagbin::{decode_document, encode_document, Compound, Value};
//!
//! let mut root = Compound::new();
//! root.insert("foo".to_string(), Value::Int(42));
//!
//! let bytes = encode_document("Level", &root).unwrap();
//! let doc = decode_document(&bytes).unwrap();
//! assert_eq!(doc.name, "Level");
//! assert_eq!(doc.root["foo"], Value::Int(42));
//! ```
//!
//! ## Feature Flags
//!
//! - `gzip` (default) — Enables [`parse`], which inspects the input for the
//!   gzip magic bytes and inflates via `flate2` before decoding. Without this
//!   feature, use [`parse_with`] and supply your own decompressor, or call
//!   [`decode_document`] on already-inflated bytes.

pub mod document;
pub mod reader;
pub mod tag;
pub mod value;
pub mod writer;

#[cfg(feature = "gzip")]
pub use document::parse;
pub use document::{decode_document, encode_document, is_compressed, parse_with, Document};
pub use reader::Reader;
pub use tag::Tag;
pub use value::{Compound, List, Value};
pub use writer::Writer;

/// Errors that can occur while encoding or decoding a tag tree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input ended before the current field was fully read.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// A tag code outside the defined 0..=11 range was encountered.
    #[error("invalid tag code: {0}")]
    InvalidTag(u8),
    /// A tag name outside the defined set was looked up.
    #[error("unknown tag name: {0:?}")]
    UnknownTagName(String),
    /// The first byte of a document was not the compound tag code.
    #[error("top-level tag must be a compound, got code {0}")]
    TopLevelTag(u8),
    /// A string payload was not valid UTF-8.
    #[error("invalid UTF-8 in string payload")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    /// A string's UTF-8 byte length does not fit the 16-bit length field.
    #[error("string is {0} bytes in UTF-8, the length field holds at most 65535")]
    StringTooLong(usize),
    /// An array or list length prefix was negative.
    #[error("negative length prefix: {0}")]
    NegativeLength(i32),
    /// A sequence has more elements than a 32-bit length field can express.
    #[error("sequence of {0} elements does not fit a 32-bit length field")]
    LengthOverflow(usize),
    /// A list element's kind differs from the list's declared element type.
    #[error("list declared element type {declared} but item {index} is {actual}")]
    ListElementMismatch {
        declared: Tag,
        index: usize,
        actual: Tag,
    },
    /// The gzip envelope could not be inflated. The underlying error is
    /// passed through from the decompressor verbatim.
    #[error("decompression failed: {0}")]
    Decompress(#[source] std::io::Error),
}

/// The result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
