//! Homogeneous lists.

use crate::error::ListError;
use crate::model::{Compound, Tag, Value};

/// An ordered sequence whose elements all share one tag.
///
/// The element tag is that of the first element; an empty list reports
/// [`Tag::End`]. Every way of building a list checks homogeneity, so a
/// `List` can always be encoded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Tag shared by every element, or `End` for an empty list.
    pub fn element_tag(&self) -> Tag {
        self.items.first().map_or(Tag::End, Value::tag)
    }

    /// Appends a value, rejecting one whose tag differs from the list's.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<(), ListError> {
        let value = value.into();
        let expected = self.element_tag();
        if expected != Tag::End && value.tag() != expected {
            return Err(ListError::Heterogeneous {
                expected,
                found: value.tag(),
            });
        }
        self.items.push(value);
        Ok(())
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Consumes the list, returning its elements.
    pub fn into_vec(self) -> Vec<Value> {
        self.items
    }

    /// Builds a list from elements already known to share one tag.
    ///
    /// Used by the decoder, which reads one declared tag for all elements.
    pub(crate) fn from_decoded(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl TryFrom<Vec<Value>> for List {
    type Error = ListError;

    fn try_from(items: Vec<Value>) -> Result<Self, Self::Error> {
        if let Some(first) = items.first() {
            let expected = first.tag();
            if let Some(bad) = items.iter().find(|v| v.tag() != expected) {
                return Err(ListError::Heterogeneous {
                    expected,
                    found: bad.tag(),
                });
            }
        }
        Ok(Self { items })
    }
}

macro_rules! impl_from_vec_for_list {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<Vec<$ty>> for List {
                fn from(v: Vec<$ty>) -> Self {
                    Self {
                        items: v.into_iter().map(Value::from).collect(),
                    }
                }
            }
        )*
    };
}

// Vec<i8> becomes a list of bytes here; as a `Value` it is a byte array.
impl_from_vec_for_list!(i8, i16, i32, i64, f32, f64, String, Vec<i8>, List, Compound);

impl From<Vec<&str>> for List {
    fn from(v: Vec<&str>) -> Self {
        Self {
            items: v.into_iter().map(Value::from).collect(),
        }
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
