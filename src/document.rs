//! The document envelope: a named top-level compound, optionally gzipped.

use bytes::Bytes;

use crate::reader::Reader;
use crate::tag::Tag;
use crate::value::Compound;
use crate::writer::Writer;
use crate::{Error, Result};

/// The two magic bytes that open a gzip stream.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// A complete archive: one named top-level compound.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub name: String,
    pub root: Compound,
}

impl Document {
    pub fn new(name: impl Into<String>, root: Compound) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }

    /// Encodes this document. See [`encode_document`].
    pub fn to_bytes(&self) -> Result<Bytes> {
        encode_document(&self.name, &self.root)
    }

    /// Decodes an uncompressed document. See [`decode_document`].
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        decode_document(data)
    }
}

/// Encodes a named compound as a complete document: the compound tag code,
/// the name as a string, then the compound payload.
pub fn encode_document(name: &str, root: &Compound) -> Result<Bytes> {
    let mut writer = Writer::with_capacity(256);
    writer.write_tag(Tag::Compound);
    writer.write_string(name)?;
    writer.write_compound(root)?;
    Ok(writer.into_bytes())
}

/// Decodes a complete uncompressed document.
///
/// # Errors
/// Returns [`Error::TopLevelTag`] if the first byte is not the compound
/// code, and the usual structural errors from the payload reads. No partial
/// document is ever returned.
pub fn decode_document(data: &[u8]) -> Result<Document> {
    let code = *data.first().ok_or(Error::UnexpectedEof)?;
    if code != Tag::Compound.code() {
        return Err(Error::TopLevelTag(code));
    }
    let mut reader = Reader::new(data);
    reader.seek(1);
    let name = reader.read_string()?;
    let root = reader.read_compound()?;
    Ok(Document { name, root })
}

/// Whether the input opens with the gzip magic bytes.
pub fn is_compressed(data: &[u8]) -> bool {
    data.len() >= 2 && data[..2] == GZIP_MAGIC
}

/// Decodes a document, delegating decompression of a gzip envelope to the
/// supplied collaborator.
///
/// The collaborator receives the full input and must return the inflated
/// bytes or an I/O error; the codec treats it as opaque. It is invoked only
/// when [`is_compressed`] matches, and its errors come back verbatim inside
/// [`Error::Decompress`] without any decode attempt. Either way the caller
/// sees one uniform `Result`.
pub fn parse_with<F>(data: &[u8], decompress: F) -> Result<Document>
where
    F: FnOnce(&[u8]) -> std::io::Result<Vec<u8>>,
{
    if is_compressed(data) {
        let inflated = decompress(data).map_err(Error::Decompress)?;
        decode_document(&inflated)
    } else {
        decode_document(data)
    }
}

/// Decodes a document, transparently inflating a gzip envelope first.
#[cfg(feature = "gzip")]
pub fn parse(data: &[u8]) -> Result<Document> {
    parse_with(data, gunzip)
}

#[cfg(feature = "gzip")]
fn gunzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use std::io::Read;

    let mut inflated = Vec::new();
    flate2::read::GzDecoder::new(data).read_to_end(&mut inflated)?;
    Ok(inflated)
}
