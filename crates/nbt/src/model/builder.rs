//! Builder API for ergonomic compound construction.
//!
//! Provides a fluent interface for building compound trees.
//!
//! # Example
//!
//! ```rust
//! use nbt::model::builder::CompoundBuilder;
//! use nbt::List;
//!
//! let level = CompoundBuilder::new()
//!     .string("name", "Test World")
//!     .long("seed", -4_172_144_997_902_289_642)
//!     .compound("spawn", |c| c
//!         .int("x", 12)
//!         .int("y", 64)
//!         .int("z", -30)
//!     )
//!     .list("scores", List::from(vec![11i64, 12, 13]))
//!     .build();
//!
//! assert_eq!(level.len(), 4);
//! ```

use crate::error::EncodeError;
use crate::model::{Compound, List, Value};

/// Builder for constructing a [`Compound`].
#[derive(Debug, Clone, Default)]
pub struct CompoundBuilder {
    compound: Compound,
}

impl CompoundBuilder {
    /// Creates a new empty CompoundBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value of any type.
    pub fn value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.compound.insert(name, value);
        self
    }

    // =========================================================================
    // Scalars
    // =========================================================================

    /// Adds a BYTE value.
    pub fn byte(self, name: impl Into<String>, value: i8) -> Self {
        self.value(name, Value::Byte(value))
    }

    /// Adds a SHORT value.
    pub fn short(self, name: impl Into<String>, value: i16) -> Self {
        self.value(name, Value::Short(value))
    }

    /// Adds an INT value.
    pub fn int(self, name: impl Into<String>, value: i32) -> Self {
        self.value(name, Value::Int(value))
    }

    /// Adds a LONG value.
    pub fn long(self, name: impl Into<String>, value: i64) -> Self {
        self.value(name, Value::Long(value))
    }

    /// Adds a FLOAT value.
    pub fn float(self, name: impl Into<String>, value: f32) -> Self {
        self.value(name, Value::Float(value))
    }

    /// Adds a DOUBLE value.
    pub fn double(self, name: impl Into<String>, value: f64) -> Self {
        self.value(name, Value::Double(value))
    }

    /// Adds an integer using the narrowest tag that holds it.
    pub fn int_auto(
        self,
        name: impl Into<String>,
        value: impl Into<i128>,
    ) -> Result<Self, EncodeError> {
        let value = Value::from_int(value)?;
        Ok(self.value(name, value))
    }

    // =========================================================================
    // Arrays, strings and containers
    // =========================================================================

    /// Adds a BYTE_ARRAY value.
    pub fn byte_array(self, name: impl Into<String>, value: impl Into<Vec<i8>>) -> Self {
        self.value(name, Value::ByteArray(value.into()))
    }

    /// Adds a STRING value.
    pub fn string(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.value(name, Value::String(value.into()))
    }

    /// Adds a LIST value.
    pub fn list(self, name: impl Into<String>, value: impl Into<List>) -> Self {
        self.value(name, Value::List(value.into()))
    }

    /// Adds a nested COMPOUND using a builder function.
    pub fn compound<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(CompoundBuilder) -> CompoundBuilder,
    {
        let nested = f(CompoundBuilder::new()).build();
        self.value(name, Value::Compound(nested))
    }

    // =========================================================================
    // Build
    // =========================================================================

    /// Builds the final Compound.
    pub fn build(self) -> Compound {
        self.compound
    }

    /// Returns the number of entries added so far.
    pub fn len(&self) -> usize {
        self.compound.len()
    }

    /// Returns true if no entries have been added.
    pub fn is_empty(&self) -> bool {
        self.compound.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tag;

    #[test]
    fn test_builder_types() {
        let c = CompoundBuilder::new()
            .byte("b", 1)
            .short("s", 2)
            .int("i", 3)
            .long("l", 4)
            .float("f", 5.0)
            .double("d", 6.0)
            .byte_array("ba", vec![1, 2])
            .string("str", "x")
            .list("li", List::from(vec![1i32]))
            .compound("c", |c| c.byte("inner", 9))
            .build();

        let tags: Vec<Tag> = c.values().map(Value::tag).collect();
        assert_eq!(
            tags,
            vec![
                Tag::Byte,
                Tag::Short,
                Tag::Int,
                Tag::Long,
                Tag::Float,
                Tag::Double,
                Tag::ByteArray,
                Tag::String,
                Tag::List,
                Tag::Compound,
            ]
        );
        assert_eq!(c.get_compound("c").and_then(|n| n.get_i64("inner")), Some(9));
    }

    #[test]
    fn test_int_auto() {
        let c = CompoundBuilder::new()
            .int_auto("small", 100u32)
            .unwrap()
            .int_auto("wide", 40_000i64)
            .unwrap()
            .build();
        assert_eq!(c.tag_of("small"), Some(Tag::Byte));
        assert_eq!(c.tag_of("wide"), Some(Tag::Int));

        assert!(CompoundBuilder::new().int_auto("huge", u64::MAX).is_err());
    }

    #[test]
    fn test_builder_last_write_wins() {
        let builder = CompoundBuilder::new().int("x", 1).int("x", 2);
        assert_eq!(builder.len(), 1);
        assert_eq!(builder.build().get_i64("x"), Some(2));
    }
}
