//! The decoder: type-directed reads over a borrowed byte slice.

use crate::tag::Tag;
use crate::value::{Compound, List, Value};
use crate::{Error, Result};

/// Decodes tag values from a caller-owned byte slice.
///
/// The reader never mutates the underlying bytes; it only advances an
/// explicit cursor, which may be repositioned with [`Reader::seek`]. Any
/// read that would pass the end of the input fails with
/// [`Error::UnexpectedEof`] and returns no partial data. Each reader is
/// scoped to one decoding session.
#[derive(Debug)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// The current read cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Repositions the read cursor.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Bytes left between the cursor and the end of the input.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn read_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(Error::UnexpectedEof);
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.read_slice(N)?);
        Ok(buf)
    }

    /// Reads a single tag code byte.
    ///
    /// # Errors
    /// Returns [`Error::InvalidTag`] for codes outside the registry.
    pub fn read_tag(&mut self) -> Result<Tag> {
        let [code] = self.read_array::<1>()?;
        Tag::from_code(code)
    }

    /// Reads `end`'s payload, which is empty.
    pub fn read_end(&mut self) -> Result<()> {
        Ok(())
    }

    pub fn read_byte(&mut self) -> Result<i8> {
        Ok(i8::from_be_bytes(self.read_array()?))
    }

    pub fn read_short(&mut self) -> Result<i16> {
        Ok(i16::from_be_bytes(self.read_array()?))
    }

    pub fn read_int(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    pub fn read_long(&mut self) -> Result<i64> {
        Ok(i64::from_be_bytes(self.read_array()?))
    }

    pub fn read_float(&mut self) -> Result<f32> {
        Ok(f32::from_be_bytes(self.read_array()?))
    }

    pub fn read_double(&mut self) -> Result<f64> {
        Ok(f64::from_be_bytes(self.read_array()?))
    }

    /// Reads a string: 2-byte unsigned UTF-8 byte count, then that many
    /// bytes validated as UTF-8.
    ///
    /// # Errors
    /// Returns [`Error::InvalidUtf8`] on malformed bytes; nothing is
    /// silently replaced.
    pub fn read_string(&mut self) -> Result<String> {
        let len = u16::from_be_bytes(self.read_array()?) as usize;
        let bytes = self.read_slice(len)?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }

    /// Reads a byte array: 4-byte length, then the raw bytes.
    pub fn read_byte_array(&mut self) -> Result<Vec<u8>> {
        let len = self.read_len()?;
        Ok(self.read_slice(len)?.to_vec())
    }

    /// Reads an int array: 4-byte length, then that many `int`s.
    pub fn read_int_array(&mut self) -> Result<Vec<i32>> {
        let len = self.read_len()?;
        let mut values = Vec::with_capacity(len.min(self.remaining() / 4));
        for _ in 0..len {
            values.push(self.read_int()?);
        }
        Ok(values)
    }

    /// Reads a list: element tag code, 4-byte count, then that many
    /// type-directed payload reads.
    pub fn read_list(&mut self) -> Result<List> {
        let element = self.read_tag()?;
        let len = self.read_len()?;
        let mut items = Vec::with_capacity(len.min(self.remaining()));
        for _ in 0..len {
            items.push(self.read_payload(element)?);
        }
        Ok(List { element, items })
    }

    /// Reads a compound: a loop of (tag code, name string, payload) entries
    /// until the `end` code. A name that repeats overwrites the earlier
    /// entry, so the last occurrence wins.
    pub fn read_compound(&mut self) -> Result<Compound> {
        let mut entries = Compound::new();
        loop {
            let tag = self.read_tag()?;
            if tag == Tag::End {
                return Ok(entries);
            }
            let name = self.read_string()?;
            let value = self.read_payload(tag)?;
            entries.insert(name, value);
        }
    }

    /// The shared dispatch: reads the payload of the given tag, the leading
    /// tag code having already been consumed. Composite values recurse
    /// through here.
    pub fn read_payload(&mut self, tag: Tag) -> Result<Value> {
        Ok(match tag {
            Tag::End => {
                self.read_end()?;
                Value::End
            }
            Tag::Byte => Value::Byte(self.read_byte()?),
            Tag::Short => Value::Short(self.read_short()?),
            Tag::Int => Value::Int(self.read_int()?),
            Tag::Long => Value::Long(self.read_long()?),
            Tag::Float => Value::Float(self.read_float()?),
            Tag::Double => Value::Double(self.read_double()?),
            Tag::ByteArray => Value::ByteArray(self.read_byte_array()?),
            Tag::String => Value::String(self.read_string()?),
            Tag::List => Value::List(self.read_list()?),
            Tag::Compound => Value::Compound(self.read_compound()?),
            Tag::IntArray => Value::IntArray(self.read_int_array()?),
        })
    }

    fn read_len(&mut self) -> Result<usize> {
        let len = self.read_int()?;
        usize::try_from(len).map_err(|_| Error::NegativeLength(len))
    }
}
