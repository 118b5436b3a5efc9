//! The tag type registry: the closed set of wire type codes.

use num_enum::TryFromPrimitive;

use crate::{Error, Result};

/// The tag of a wire value. This carries the type code only, not the value
/// or the name.
///
/// Codes are stable and part of the wire format: every encoded composite
/// stores these as single bytes (the list element type, each compound entry
/// type, the top-level document type).
#[derive(Debug, TryFromPrimitive, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Tag {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
}

impl Tag {
    /// Looks up a tag by its wire code.
    ///
    /// # Errors
    /// Returns [`Error::InvalidTag`] for codes outside `0..=11`.
    pub fn from_code(code: u8) -> Result<Self> {
        Self::try_from(code).map_err(|_| Error::InvalidTag(code))
    }

    /// The wire code of this tag.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a tag by its symbolic name, e.g. `"byteArray"`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownTagName`] for names outside the defined set.
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(match name {
            "end" => Tag::End,
            "byte" => Tag::Byte,
            "short" => Tag::Short,
            "int" => Tag::Int,
            "long" => Tag::Long,
            "float" => Tag::Float,
            "double" => Tag::Double,
            "byteArray" => Tag::ByteArray,
            "string" => Tag::String,
            "list" => Tag::List,
            "compound" => Tag::Compound,
            "intArray" => Tag::IntArray,
            other => return Err(Error::UnknownTagName(other.to_string())),
        })
    }

    /// The symbolic name of this tag.
    pub fn name(self) -> &'static str {
        match self {
            Tag::End => "end",
            Tag::Byte => "byte",
            Tag::Short => "short",
            Tag::Int => "int",
            Tag::Long => "long",
            Tag::Float => "float",
            Tag::Double => "double",
            Tag::ByteArray => "byteArray",
            Tag::String => "string",
            Tag::List => "list",
            Tag::Compound => "compound",
            Tag::IntArray => "intArray",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
