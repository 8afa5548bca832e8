//! Document decoding for the NBT binary format.
//!
//! A recursive-descent reader: one pass, no backtracking. The whole tree is
//! materialized before it is returned, and any failure discards everything
//! decoded so far.

use std::io::Read;

use tracing::{debug, trace};

use crate::codec::primitives::Reader;
use crate::error::DecodeError;
use crate::limits::{MAX_ARRAY_LEN, MAX_DEPTH, MAX_LIST_LEN};
use crate::model::{Compound, List, Tag, Value};

/// Decodes a document, returning its root compound.
///
/// The root must be a single named entry tagged COMPOUND; its name is
/// discarded (see [`decode_named`] to keep it). Bytes following the root
/// are ignored.
pub fn decode(input: &[u8]) -> Result<Compound, DecodeError> {
    decode_named(input).map(|(_, root)| root)
}

/// Decodes a document, returning the root name and root compound.
pub fn decode_named(input: &[u8]) -> Result<(String, Compound), DecodeError> {
    let mut reader = Reader::new(input);
    let tag_byte = reader.read_byte("root tag")?;
    let tag = read_tag(tag_byte)?;
    if tag != Tag::Compound {
        return Err(DecodeError::RootNotCompound { tag });
    }

    let name = reader.read_string("root name")?;
    let root = read_compound(&mut reader, 1)?;

    let trailing = reader.remaining_len();
    if trailing > 0 {
        debug!(trailing, "ignoring bytes after root compound");
    }
    trace!(root_name = %name, entries = root.len(), bytes = reader.position(), "decoded document");
    Ok((name, root))
}

/// Reads a byte source to its end, then decodes it.
///
/// The source is buffered completely first, so a failure never leaves a
/// half-built tree behind.
pub fn decode_reader<R: Read>(mut source: R) -> Result<Compound, DecodeError> {
    let mut buf = Vec::new();
    source
        .read_to_end(&mut buf)
        .map_err(|e| DecodeError::Io(e.to_string()))?;
    decode(&buf)
}

fn read_tag(byte: u8) -> Result<Tag, DecodeError> {
    Tag::from_u8(byte).ok_or(DecodeError::UnrecognizedTag { tag: byte })
}

/// Reads one named entry into `compound`. Returns `false` at the END
/// terminator. Entries are inserted in place and never returned up the
/// recursion by value.
fn read_named_entry(
    reader: &mut Reader<'_>,
    depth: usize,
    compound: &mut Compound,
) -> Result<bool, DecodeError> {
    let tag = read_tag(reader.read_byte("entry tag")?)?;
    if tag == Tag::End {
        return Ok(false);
    }
    let name = reader.read_string("entry name")?;
    let value = read_payload(reader, tag, depth)?;
    if compound.insert(name, value).is_some() {
        trace!("duplicate compound key overwritten");
    }
    Ok(true)
}

/// Reads the unnamed payload for `tag`.
fn read_payload(reader: &mut Reader<'_>, tag: Tag, depth: usize) -> Result<Value, DecodeError> {
    match tag {
        Tag::Byte => Ok(Value::Byte(reader.read_i8("byte")?)),
        Tag::Short => Ok(Value::Short(reader.read_i16("short")?)),
        Tag::Int => Ok(Value::Int(reader.read_i32("int")?)),
        Tag::Long => Ok(Value::Long(reader.read_i64("long")?)),
        Tag::Float => Ok(Value::Float(reader.read_f32("float")?)),
        Tag::Double => Ok(Value::Double(reader.read_f64("double")?)),
        Tag::ByteArray => read_byte_array(reader).map(Value::ByteArray),
        Tag::String => reader.read_string("string").map(Value::String),
        Tag::List => read_list(reader, depth + 1).map(Value::List),
        Tag::Compound => read_compound(reader, depth + 1).map(Value::Compound),
        Tag::End => Err(DecodeError::MalformedEncoding {
            context: "END tag carries no payload",
        }),
    }
}

fn read_byte_array(reader: &mut Reader<'_>) -> Result<Vec<i8>, DecodeError> {
    let len = reader.read_len(MAX_ARRAY_LEN, "byte_array")?;
    let bytes = reader.read_bytes(len, "byte_array")?;
    Ok(bytes.iter().map(|b| *b as i8).collect())
}

fn read_list(reader: &mut Reader<'_>, depth: usize) -> Result<List, DecodeError> {
    check_depth(depth)?;
    let element_tag = read_tag(reader.read_byte("list element tag")?)?;
    let count = reader.read_len(MAX_LIST_LEN, "list")?;

    if element_tag == Tag::End {
        if count != 0 {
            return Err(DecodeError::MalformedEncoding {
                context: "non-empty list of END",
            });
        }
        return Ok(List::new());
    }

    // Reject counts the remaining input cannot hold before allocating.
    let min_len = count.saturating_mul(element_tag.min_payload_len());
    if min_len > reader.remaining_len() {
        return Err(DecodeError::TruncatedInput { context: "list" });
    }

    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(read_payload(reader, element_tag, depth)?);
    }
    Ok(List::from_decoded(items))
}

/// Reads named entries until END. Duplicate names: last write wins.
fn read_compound(reader: &mut Reader<'_>, depth: usize) -> Result<Compound, DecodeError> {
    check_depth(depth)?;
    let mut compound = Compound::new();
    while read_named_entry(reader, depth, &mut compound)? {}
    Ok(compound)
}

fn check_depth(depth: usize) -> Result<(), DecodeError> {
    if depth > MAX_DEPTH {
        return Err(DecodeError::DepthLimitExceeded { max: MAX_DEPTH });
    }
    Ok(())
}
