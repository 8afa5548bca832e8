//! Error types for NBT encoding and decoding.

use thiserror::Error;

use crate::model::Tag;

/// Classification of decode failures.
///
/// Every [`DecodeError`] belongs to exactly one class; together they form the
/// "invalid byte sequence" family reported by [`crate::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Input ended before a value or length prefix was satisfied
    TruncatedInput,
    /// E002: Tag byte outside 0-10
    UnrecognizedTag,
    /// E003: Document root is not a compound
    RootType,
    /// E004: Invalid UTF-8 encoding
    InvalidUtf8,
    /// E005: Malformed length/limit/container
    MalformedEncoding,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::TruncatedInput => "E001",
            ErrorCode::UnrecognizedTag => "E002",
            ErrorCode::RootType => "E003",
            ErrorCode::InvalidUtf8 => "E004",
            ErrorCode::MalformedEncoding => "E005",
        }
    }
}

/// Error during binary decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    // === E001: Truncated input ===
    #[error("[E001] unexpected end of input while reading {context}")]
    TruncatedInput { context: &'static str },

    // === E002: Unrecognized tag ===
    #[error("[E002] unrecognized tag byte: {tag}")]
    UnrecognizedTag { tag: u8 },

    // === E003: Root type ===
    #[error("[E003] document root must be a compound, found {tag}")]
    RootNotCompound { tag: Tag },

    // === E004: Invalid UTF-8 ===
    #[error("[E004] invalid UTF-8 in {field}")]
    InvalidUtf8 { field: &'static str },

    // === E005: Malformed encoding ===
    #[error("[E005] negative {field} length: {len}")]
    NegativeLength { field: &'static str, len: i32 },

    #[error("[E005] {field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("[E005] nesting depth exceeds maximum {max}")]
    DepthLimitExceeded { max: usize },

    #[error("[E005] malformed encoding: {context}")]
    MalformedEncoding { context: &'static str },

    // === Collaborator errors ===
    #[error("[E005] decompression failed: {0}")]
    DecompressionFailed(String),

    #[error("[E001] read failed: {0}")]
    Io(String),
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::TruncatedInput { .. } | DecodeError::Io(_) => ErrorCode::TruncatedInput,
            DecodeError::UnrecognizedTag { .. } => ErrorCode::UnrecognizedTag,
            DecodeError::RootNotCompound { .. } => ErrorCode::RootType,
            DecodeError::InvalidUtf8 { .. } => ErrorCode::InvalidUtf8,
            _ => ErrorCode::MalformedEncoding,
        }
    }
}

/// Error during binary encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("unsupported value type: {reason}")]
    UnsupportedValueType { reason: String },

    #[error("string of {len} bytes exceeds the 32767-byte limit")]
    StringTooLong { len: usize },

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("nesting depth exceeds maximum {max}")]
    DepthLimitExceeded { max: usize },

    #[error("compression failed: {0}")]
    CompressionFailed(String),

    #[error("write failed: {0}")]
    Io(String),
}

/// Error when building a list from mixed element types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("list holds {expected} elements, cannot add {found}")]
    Heterogeneous { expected: Tag, found: Tag },
}
