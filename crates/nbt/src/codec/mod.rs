//! Binary encoding/decoding for NBT documents.
//!
//! All multi-byte integers are big-endian. Every value is introduced by a
//! one-byte tag, and compound entries and the document root also carry an
//! i16-length-prefixed name.

pub mod decode;
pub mod encode;
pub mod primitives;

pub use decode::{decode, decode_named, decode_reader};
pub use encode::{encode, encode_to_writer};
pub use primitives::{Reader, Writer};
