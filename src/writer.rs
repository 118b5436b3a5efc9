//! The encoder: type-directed writes into an owned growable buffer.

use bytes::{Bytes, BytesMut};

use crate::tag::Tag;
use crate::value::{Compound, Value};
use crate::{Error, Result};

/// Encodes tag values into an owned byte buffer.
///
/// The writer keeps an explicit cursor that every write advances. The cursor
/// may be repositioned anywhere with [`Writer::seek`]; writing past the
/// current content grows the buffer and zero-fills any gap, so seeking
/// around never exposes stale bytes. Each writer owns its buffer exclusively
/// and is scoped to one encoding session.
///
/// A `Writer` mutates its cursor on every operation and is not meant for
/// shared concurrent use; distinct writers are fully independent.
#[derive(Debug, Default)]
pub struct Writer {
    buf: BytesMut,
    pos: usize,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
            pos: 0,
        }
    }

    /// The current write cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Repositions the write cursor. Seeking past the current content is
    /// allowed; the gap is zero-filled when the next write lands there.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// The number of content bytes written so far (independent of the
    /// cursor position).
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consumes the writer and freezes its buffer.
    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }

    /// The content written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Grows the buffer so that `size` bytes fit at the cursor. Bytes
    /// between the old content end and the cursor are zero-filled.
    fn ensure_capacity(&mut self, size: usize) {
        let end = self.pos + size;
        if end > self.buf.len() {
            self.buf.resize(end, 0);
        }
    }

    fn put_slice(&mut self, bytes: &[u8]) {
        self.ensure_capacity(bytes.len());
        let end = self.pos + bytes.len();
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }

    /// Writes a single tag code byte.
    pub fn write_tag(&mut self, tag: Tag) {
        self.put_slice(&[tag.code()]);
    }

    /// Writes `end`'s payload, which is empty. The sentinel byte that
    /// terminates a compound is written by [`Writer::write_compound`]
    /// itself as a tag code.
    pub fn write_end(&mut self) {}

    pub fn write_byte(&mut self, v: i8) {
        self.put_slice(&v.to_be_bytes());
    }

    pub fn write_short(&mut self, v: i16) {
        self.put_slice(&v.to_be_bytes());
    }

    pub fn write_int(&mut self, v: i32) {
        self.put_slice(&v.to_be_bytes());
    }

    pub fn write_long(&mut self, v: i64) {
        self.put_slice(&v.to_be_bytes());
    }

    pub fn write_float(&mut self, v: f32) {
        self.put_slice(&v.to_be_bytes());
    }

    pub fn write_double(&mut self, v: f64) {
        self.put_slice(&v.to_be_bytes());
    }

    /// Writes a string: 2-byte unsigned UTF-8 byte count, then the bytes.
    ///
    /// The count is the exact number of bytes the string occupies in UTF-8,
    /// so a codepoint outside the BMP contributes 4, not the 2 units a
    /// UTF-16 representation would count.
    ///
    /// # Errors
    /// Returns [`Error::StringTooLong`] past 65535 UTF-8 bytes.
    pub fn write_string(&mut self, v: &str) -> Result<()> {
        let len = v.len();
        if len > u16::MAX as usize {
            return Err(Error::StringTooLong(len));
        }
        self.put_slice(&(len as u16).to_be_bytes());
        self.put_slice(v.as_bytes());
        Ok(())
    }

    /// Writes a byte array: 4-byte length, then the raw bytes verbatim.
    pub fn write_byte_array(&mut self, v: &[u8]) -> Result<()> {
        self.write_len(v.len())?;
        self.put_slice(v);
        Ok(())
    }

    /// Writes an int array: 4-byte length, then each element as an `int`.
    pub fn write_int_array(&mut self, v: &[i32]) -> Result<()> {
        self.write_len(v.len())?;
        for n in v {
            self.write_int(*n);
        }
        Ok(())
    }

    /// Writes a list: element tag code, 4-byte count, then each element's
    /// payload in order.
    ///
    /// # Errors
    /// Returns [`Error::ListElementMismatch`] if any item's kind differs
    /// from the declared element type. Nothing corrupt is ever written: the
    /// check runs before any byte of the list goes out.
    pub fn write_list(&mut self, element: Tag, items: &[Value]) -> Result<()> {
        for (index, item) in items.iter().enumerate() {
            if item.tag() != element {
                return Err(Error::ListElementMismatch {
                    declared: element,
                    index,
                    actual: item.tag(),
                });
            }
        }
        self.write_tag(element);
        self.write_len(items.len())?;
        for item in items {
            self.write_payload(item)?;
        }
        Ok(())
    }

    /// Writes a compound: per entry the tag code, the name string, and the
    /// payload, in the order the map iterates; then the `end` sentinel.
    /// An empty compound is just the sentinel byte.
    pub fn write_compound(&mut self, entries: &Compound) -> Result<()> {
        for (name, value) in entries {
            self.write_tag(value.tag());
            self.write_string(name)?;
            self.write_payload(value)?;
        }
        self.write_tag(Tag::End);
        Ok(())
    }

    /// The shared dispatch: writes the payload of any value, without a
    /// leading tag code. Composite values recurse through here.
    pub fn write_payload(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::End => self.write_end(),
            Value::Byte(v) => self.write_byte(*v),
            Value::Short(v) => self.write_short(*v),
            Value::Int(v) => self.write_int(*v),
            Value::Long(v) => self.write_long(*v),
            Value::Float(v) => self.write_float(*v),
            Value::Double(v) => self.write_double(*v),
            Value::ByteArray(v) => self.write_byte_array(v)?,
            Value::String(v) => self.write_string(v)?,
            Value::List(v) => self.write_list(v.element, &v.items)?,
            Value::Compound(v) => self.write_compound(v)?,
            Value::IntArray(v) => self.write_int_array(v)?,
        }
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        let len = i32::try_from(len).map_err(|_| Error::LengthOverflow(len))?;
        self.write_int(len);
        Ok(())
    }
}
