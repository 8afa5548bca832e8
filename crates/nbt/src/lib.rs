//! NBT: a codec for Named Binary Tag documents.
//!
//! This crate provides encoding and decoding for the NBT binary format: a
//! self-describing tree where every value is preceded by a one-byte type
//! tag and compound entries carry length-prefixed names.
//!
//! # Quick Start
//!
//! ```rust
//! use nbt::{decode, encode, CompoundBuilder, List, Value};
//!
//! let root = CompoundBuilder::new()
//!     .string("name", "Eggbert")
//!     .double("value", 0.5)
//!     .list("scores", List::from(vec![11i64, 12, 13]))
//!     .build();
//!
//! // Encode to binary (unnamed root)
//! let bytes = encode(&root, "").unwrap();
//!
//! // Decode back
//! let decoded = decode(&bytes).unwrap();
//! assert_eq!(decoded, root);
//! assert_eq!(decoded.get("value"), Some(&Value::Double(0.5)));
//! ```
//!
//! # Modules
//!
//! - [`model`]: The value tree (Tag, Value, Compound, List, builder)
//! - [`codec`]: Binary encoding/decoding
//! - [`compress`]: gzip/zstd wrappers with auto-detection
//! - [`error`]: Error types
//! - [`limits`]: Security limits for decoding
//!
//! # Security
//!
//! The decoder is designed to safely handle untrusted input:
//! - Nesting depth is bounded by [`limits::MAX_DEPTH`]
//! - Length prefixes are checked against the remaining input before allocating
//! - Decompressed size is bounded by [`limits::MAX_DECOMPRESSED_SIZE`]
//! - Any malformed input fails the whole decode; no partial tree is returned
//!
//! # Wire Format
//!
//! | Tag | Code | Payload |
//! |---|---|---|
//! | End | 0 | none (compound terminator) |
//! | Byte | 1 | 1 byte |
//! | Short | 2 | 2 bytes |
//! | Int | 3 | 4 bytes |
//! | Long | 4 | 8 bytes |
//! | Float | 5 | 4 bytes IEEE-754 |
//! | Double | 6 | 8 bytes IEEE-754 |
//! | ByteArray | 7 | i32 length + bytes |
//! | String | 8 | i16 length + UTF-8 bytes |
//! | List | 9 | element tag + i32 count + untagged payloads |
//! | Compound | 10 | named entries, then End |

pub mod codec;
pub mod compress;
pub mod error;
pub mod limits;
pub mod model;

// Re-export commonly used types at crate root
pub use codec::{decode, decode_named, decode_reader, encode, encode_to_writer};
pub use compress::{
    compress, decode_compressed, decode_compressed_reader, decompress, detect, encode_compressed,
    Compression, Container,
};
pub use error::{DecodeError, EncodeError, ErrorCode, ListError};
pub use model::{Compound, CompoundBuilder, List, Tag, Value};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
