//! Data model types for NBT documents.
//!
//! This module contains the in-memory value tree:
//! - Tags (wire discriminators and integer narrowing)
//! - Values (the closed sum of every carried shape)
//! - Compounds and homogeneous lists
//! - Builders (ergonomic construction)

pub mod builder;
pub mod compound;
pub mod list;
pub mod tag;
pub mod value;

pub use builder::CompoundBuilder;
pub use compound::Compound;
pub use list::List;
pub use tag::Tag;
pub use value::Value;
