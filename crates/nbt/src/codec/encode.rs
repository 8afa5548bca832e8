//! Document encoding for the NBT binary format.
//!
//! The mirror of [`crate::codec::decode`]: a recursive writer that emits
//! exactly the bytes the decoder expects. Compounds are written in their
//! insertion order, so the output for a given tree is deterministic.

use std::io::Write;

use tracing::trace;

use crate::codec::primitives::Writer;
use crate::error::EncodeError;
use crate::limits::MAX_DEPTH;
use crate::model::{Compound, List, Tag, Value};

/// Encodes a root compound under `name` (use `""` for an unnamed root).
///
/// Either the whole document is returned or nothing is.
pub fn encode(root: &Compound, name: &str) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::with_capacity(64 + root.len() * 16);
    writer.write_byte(Tag::Compound.as_u8());
    writer.write_string(name)?;
    write_compound(&mut writer, root, 1)?;
    trace!(root_name = name, entries = root.len(), bytes = writer.len(), "encoded document");
    Ok(writer.into_bytes())
}

/// Encodes a root compound and writes it to `sink`.
///
/// The document is fully encoded in memory first, so an encoding failure
/// never leaves a partial document in the sink.
pub fn encode_to_writer<W: Write>(
    root: &Compound,
    name: &str,
    mut sink: W,
) -> Result<(), EncodeError> {
    let bytes = encode(root, name)?;
    sink.write_all(&bytes).map_err(|e| EncodeError::Io(e.to_string()))
}

/// Writes tag byte, name and payload.
fn write_named_value(
    writer: &mut Writer,
    name: &str,
    value: &Value,
    depth: usize,
) -> Result<(), EncodeError> {
    writer.write_byte(value.tag().as_u8());
    writer.write_string(name)?;
    write_payload(writer, value, depth)
}

/// Writes a payload with neither tag nor name, as list elements are written.
fn write_payload(writer: &mut Writer, value: &Value, depth: usize) -> Result<(), EncodeError> {
    match value {
        Value::Byte(v) => writer.write_i8(*v),
        Value::Short(v) => writer.write_i16(*v),
        Value::Int(v) => writer.write_i32(*v),
        Value::Long(v) => writer.write_i64(*v),
        Value::Float(v) => writer.write_f32(*v),
        Value::Double(v) => writer.write_f64(*v),
        Value::ByteArray(bytes) => {
            writer.write_len(bytes.len(), "byte_array")?;
            for b in bytes {
                writer.write_i8(*b);
            }
        }
        Value::String(s) => writer.write_string(s)?,
        Value::List(list) => write_list(writer, list, depth + 1)?,
        Value::Compound(compound) => write_compound(writer, compound, depth + 1)?,
    }
    Ok(())
}

/// Writes every entry, then the END terminator.
fn write_compound(writer: &mut Writer, compound: &Compound, depth: usize) -> Result<(), EncodeError> {
    check_depth(depth)?;
    for (name, value) in compound {
        write_named_value(writer, name, value, depth)?;
    }
    writer.write_byte(Tag::End.as_u8());
    Ok(())
}

/// Writes element tag, count and untagged element payloads.
///
/// An empty list is always `END` with count 0, whatever it was built from.
fn write_list(writer: &mut Writer, list: &List, depth: usize) -> Result<(), EncodeError> {
    check_depth(depth)?;
    let element_tag = list.element_tag();
    writer.write_byte(element_tag.as_u8());
    writer.write_len(list.len(), "list")?;
    for item in list {
        // Homogeneous by construction.
        debug_assert_eq!(item.tag(), element_tag);
        write_payload(writer, item, depth)?;
    }
    Ok(())
}

fn check_depth(depth: usize) -> Result<(), EncodeError> {
    if depth > MAX_DEPTH {
        return Err(EncodeError::DepthLimitExceeded { max: MAX_DEPTH });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode::decode;
    use crate::model::CompoundBuilder;

    #[test]
    fn test_empty_root() {
        let bytes = encode(&Compound::new(), "").unwrap();
        assert_eq!(bytes, vec![10, 0, 0, 0]);
    }

    #[test]
    fn test_named_root() {
        let bytes = encode(&Compound::new(), "hi").unwrap();
        assert_eq!(bytes, vec![10, 0, 2, b'h', b'i', 0]);
    }

    #[test]
    fn test_golden_bytes() {
        let root = CompoundBuilder::new()
            .byte("b", -1)
            .int("i", 0xdead)
            .string("s", "ok")
            .build();
        let bytes = encode(&root, "").unwrap();
        assert_eq!(
            bytes,
            vec![
                10, 0, 0, //
                1, 0, 1, b'b', 0xff, //
                3, 0, 1, b'i', 0, 0, 0xde, 0xad, //
                8, 0, 1, b's', 0, 2, b'o', b'k', //
                0,
            ]
        );
    }

    #[test]
    fn test_empty_list_is_five_zero_bytes() {
        let root = CompoundBuilder::new().list("e", List::new()).build();
        let bytes = encode(&root, "").unwrap();
        // root header (3) + tag (1) + name "e" (3) + list payload (5) + END (1)
        assert_eq!(&bytes[7..12], &[0, 0, 0, 0, 0]);
        assert_eq!(bytes.len(), 13);
    }

    #[test]
    fn test_list_elements_have_no_tag_or_name() {
        let root = CompoundBuilder::new()
            .list("l", List::from(vec![1i16, 2]))
            .build();
        let bytes = encode(&root, "").unwrap();
        assert_eq!(
            &bytes[3..],
            &[9, 0, 1, b'l', 2, 0, 0, 0, 2, 0, 1, 0, 2, 0]
        );
    }

    #[test]
    fn test_compound_in_list_is_body_only() {
        let inner = CompoundBuilder::new().byte("x", 5).build();
        let root = CompoundBuilder::new()
            .list("c", List::from(vec![inner]))
            .build();
        let bytes = encode(&root, "").unwrap();
        assert_eq!(
            &bytes[3..],
            &[9, 0, 1, b'c', 10, 0, 0, 0, 1, 1, 0, 1, b'x', 5, 0, 0]
        );
    }

    #[test]
    fn test_string_limits() {
        let ok = CompoundBuilder::new().string("s", "a".repeat(32767)).build();
        let bytes = encode(&ok, "").unwrap();
        assert_eq!(decode(&bytes).unwrap(), ok);

        let too_long = CompoundBuilder::new().string("s", "a".repeat(32768)).build();
        assert!(matches!(
            encode(&too_long, ""),
            Err(EncodeError::StringTooLong { len: 32768 })
        ));
    }

    #[test]
    fn test_long_key_rejected() {
        let root = CompoundBuilder::new().int("k".repeat(40000), 1).build();
        assert!(matches!(
            encode(&root, ""),
            Err(EncodeError::StringTooLong { .. })
        ));
    }

    #[test]
    fn test_depth_limit() {
        let mut value = Compound::new();
        for _ in 0..MAX_DEPTH {
            let mut outer = Compound::new();
            outer.insert("n", value);
            value = outer;
        }
        assert!(matches!(
            encode(&value, ""),
            Err(EncodeError::DepthLimitExceeded { max: MAX_DEPTH })
        ));
    }

    #[test]
    fn test_encode_to_writer() {
        let root = CompoundBuilder::new().long("l", 7).build();
        let mut sink = Vec::new();
        encode_to_writer(&root, "", &mut sink).unwrap();
        assert_eq!(sink, encode(&root, "").unwrap());
    }

    #[test]
    fn test_failed_encode_writes_nothing() {
        let root = CompoundBuilder::new()
            .int("first", 1)
            .string("bad", "a".repeat(40000))
            .build();
        let mut sink = Vec::new();
        assert!(encode_to_writer(&root, "", &mut sink).is_err());
        assert!(sink.is_empty());
    }
}
