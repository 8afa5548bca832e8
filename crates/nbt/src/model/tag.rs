//! Tag vocabulary for the NBT wire format.

use std::fmt;

/// One-byte discriminator preceding every value on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Compound terminator and element tag of an empty list. Never carries a value.
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
}

impl Tag {
    /// Creates a Tag from its wire representation.
    pub fn from_u8(v: u8) -> Option<Tag> {
        match v {
            0 => Some(Tag::End),
            1 => Some(Tag::Byte),
            2 => Some(Tag::Short),
            3 => Some(Tag::Int),
            4 => Some(Tag::Long),
            5 => Some(Tag::Float),
            6 => Some(Tag::Double),
            7 => Some(Tag::ByteArray),
            8 => Some(Tag::String),
            9 => Some(Tag::List),
            10 => Some(Tag::Compound),
            _ => None,
        }
    }

    /// Returns the wire byte for this tag.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the smallest tag able to hold `n`, narrowest first.
    ///
    /// Returns `None` when `n` does not fit in a signed 64-bit integer.
    pub fn for_integer(n: i128) -> Option<Tag> {
        if i8::try_from(n).is_ok() {
            Some(Tag::Byte)
        } else if i16::try_from(n).is_ok() {
            Some(Tag::Short)
        } else if i32::try_from(n).is_ok() {
            Some(Tag::Int)
        } else if i64::try_from(n).is_ok() {
            Some(Tag::Long)
        } else {
            None
        }
    }

    /// Minimum number of bytes a payload with this tag occupies on the wire.
    ///
    /// The decoder uses this to reject element counts that cannot possibly
    /// be satisfied by the remaining input before allocating.
    pub fn min_payload_len(self) -> usize {
        match self {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 4,
            Tag::Long => 8,
            Tag::Float => 4,
            Tag::Double => 8,
            Tag::ByteArray => 4,
            Tag::String => 2,
            Tag::List => 5,
            Tag::Compound => 1,
        }
    }

    /// Conventional name of the tag (e.g. `TAG_Compound`).
    pub fn name(self) -> &'static str {
        match self {
            Tag::End => "TAG_End",
            Tag::Byte => "TAG_Byte",
            Tag::Short => "TAG_Short",
            Tag::Int => "TAG_Int",
            Tag::Long => "TAG_Long",
            Tag::Float => "TAG_Float",
            Tag::Double => "TAG_Double",
            Tag::ByteArray => "TAG_Byte_Array",
            Tag::String => "TAG_String",
            Tag::List => "TAG_List",
            Tag::Compound => "TAG_Compound",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Tag {
    type Error = u8;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Tag::from_u8(v).ok_or(v)
    }
}
