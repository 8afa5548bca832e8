//! Security limits for decoding untrusted input.
//!
//! Lengths on the wire are attacker-controlled; the decoder checks every
//! count against these limits and against the remaining input before it
//! allocates.

/// Maximum nesting depth of compounds and lists, counted from the root.
///
/// Decoding recurses once per level; this bound keeps a maximally nested
/// document within a 2 MiB thread stack in unoptimized builds.
pub const MAX_DEPTH: usize = 256;

/// Largest string byte length the format can express (signed 16-bit count).
pub const MAX_STRING_LEN: usize = i16::MAX as usize;

/// Maximum byte array length (signed 32-bit count).
pub const MAX_ARRAY_LEN: usize = i32::MAX as usize;

/// Maximum number of list elements (signed 32-bit count).
pub const MAX_LIST_LEN: usize = i32::MAX as usize;

/// Maximum decompressed document size (256 MiB).
pub const MAX_DECOMPRESSED_SIZE: usize = 256 * 1024 * 1024;
