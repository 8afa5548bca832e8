//! Value types for NBT documents.
//!
//! A [`Value`] is a closed sum over every shape the wire format can carry.
//! Its tag is a property of the variant, so encoding never needs runtime
//! type inspection.

use crate::error::EncodeError;
use crate::model::{Compound, List, Tag};

/// A typed value stored in a compound slot or list element.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed 8-bit integer.
    Byte(i8),
    /// Signed 16-bit integer.
    Short(i16),
    /// Signed 32-bit integer.
    Int(i32),
    /// Signed 64-bit integer.
    Long(i64),
    /// 32-bit IEEE 754 float (bit-exact, NaN allowed).
    Float(f32),
    /// 64-bit IEEE 754 float (bit-exact, NaN allowed).
    Double(f64),
    /// Sequence of signed bytes.
    ByteArray(Vec<i8>),
    /// UTF-8 text, at most 32767 bytes when encoded.
    String(String),
    /// Homogeneous ordered sequence.
    List(List),
    /// Keyed mapping of named values.
    Compound(Compound),
}

impl Value {
    /// Returns the wire tag for this value.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
        }
    }

    /// Builds an integer value using the narrowest tag that holds `n`.
    ///
    /// Use this for integers that carry no fixed width of their own
    /// (`u8`, `u32`, `usize`, `i128`, values parsed from text...). Fails
    /// when `n` is outside the signed 64-bit range.
    ///
    /// ```rust
    /// use nbt::Value;
    ///
    /// assert_eq!(Value::from_int(127).unwrap(), Value::Byte(127));
    /// assert_eq!(Value::from_int(128).unwrap(), Value::Short(128));
    /// assert!(Value::from_int(u64::MAX).is_err());
    /// ```
    pub fn from_int(n: impl Into<i128>) -> Result<Value, EncodeError> {
        let n = n.into();
        // Each arm is guarded by `for_integer`, so the casts are lossless.
        match Tag::for_integer(n) {
            Some(Tag::Byte) => Ok(Value::Byte(n as i8)),
            Some(Tag::Short) => Ok(Value::Short(n as i16)),
            Some(Tag::Int) => Ok(Value::Int(n as i32)),
            Some(Tag::Long) => Ok(Value::Long(n as i64)),
            _ => Err(EncodeError::UnsupportedValueType {
                reason: format!("integer {n} exceeds the signed 64-bit range"),
            }),
        }
    }

    /// Returns the value as an `i64` if it is any integer variant.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Byte(v) => Some(*v as i64),
            Value::Short(v) => Some(*v as i64),
            Value::Int(v) => Some(*v as i64),
            Value::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as an `f64` if it is a float variant.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v as f64),
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string slice if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list if this is a list.
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the compound if this is a compound.
    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the byte array if this is a byte array.
    pub fn as_byte_array(&self) -> Option<&[i8]> {
        match self {
            Value::ByteArray(b) => Some(b),
            _ => None,
        }
    }
}

macro_rules! impl_from_for_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_for_value! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Vec<i8> => ByteArray,
    String => String,
    List => List,
    Compound => Compound,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<bool> for Value {
    /// Booleans are stored as a byte, `1` for true and `0` for false.
    fn from(v: bool) -> Self {
        Value::Byte(v as i8)
    }
}

impl From<&[u8]> for Value {
    /// Reinterprets unsigned bytes as the format's signed byte array.
    fn from(v: &[u8]) -> Self {
        Value::ByteArray(v.iter().map(|b| *b as i8).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_of_each_variant() {
        assert_eq!(Value::Byte(1).tag(), Tag::Byte);
        assert_eq!(Value::Short(1).tag(), Tag::Short);
        assert_eq!(Value::Int(1).tag(), Tag::Int);
        assert_eq!(Value::Long(1).tag(), Tag::Long);
        assert_eq!(Value::Float(1.0).tag(), Tag::Float);
        assert_eq!(Value::Double(1.0).tag(), Tag::Double);
        assert_eq!(Value::ByteArray(vec![]).tag(), Tag::ByteArray);
        assert_eq!(Value::from("x").tag(), Tag::String);
        assert_eq!(Value::List(List::new()).tag(), Tag::List);
        assert_eq!(Value::Compound(Compound::new()).tag(), Tag::Compound);
    }

    #[test]
    fn test_from_int_narrows() {
        assert_eq!(Value::from_int(127).unwrap(), Value::Byte(127));
        assert_eq!(Value::from_int(-128).unwrap(), Value::Byte(-128));
        assert_eq!(Value::from_int(128).unwrap(), Value::Short(128));
        assert_eq!(Value::from_int(32767).unwrap(), Value::Short(32767));
        assert_eq!(Value::from_int(-32768).unwrap(), Value::Short(-32768));
        assert_eq!(Value::from_int(2147483647).unwrap(), Value::Int(2147483647));
        assert_eq!(Value::from_int(-2147483648i64).unwrap(), Value::Int(-2147483648));
        assert_eq!(Value::from_int(2147483648u32).unwrap(), Value::Long(2147483648));
        assert_eq!(Value::from_int(200u8).unwrap(), Value::Short(200));
    }

    #[test]
    fn test_from_int_out_of_range() {
        let result = Value::from_int(u64::MAX);
        assert!(matches!(result, Err(EncodeError::UnsupportedValueType { .. })));
        assert!(Value::from_int(i128::MIN).is_err());
    }

    #[test]
    fn test_exact_width_conversions_do_not_narrow() {
        assert_eq!(Value::from(5i64), Value::Long(5));
        assert_eq!(Value::from(5i32), Value::Int(5));
        assert_eq!(Value::from(true), Value::Byte(1));
        assert_eq!(Value::from(&[0xffu8, 1][..]), Value::ByteArray(vec![-1, 1]));
    }
}
