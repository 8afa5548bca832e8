//! Primitive encoding/decoding for the NBT binary format.
//!
//! Every multi-byte quantity is big-endian with no padding.

use crate::error::{DecodeError, EncodeError};
use crate::limits::MAX_STRING_LEN;

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding binary data.
///
/// Wraps a byte slice and provides methods for reading primitives
/// with bounds checking and error handling.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        if self.pos >= self.data.len() {
            return Err(DecodeError::TruncatedInput { context });
        }
        let byte = self.data[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Reads exactly n bytes.
    #[inline]
    pub fn read_bytes(&mut self, n: usize, context: &'static str) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining_len() {
            return Err(DecodeError::TruncatedInput { context });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Reads exactly N bytes into an array.
    #[inline]
    fn read_array<const N: usize>(&mut self, context: &'static str) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N, context)?);
        Ok(out)
    }

    /// Reads a signed byte.
    #[inline]
    pub fn read_i8(&mut self, context: &'static str) -> Result<i8, DecodeError> {
        Ok(self.read_byte(context)? as i8)
    }

    /// Reads a big-endian i16.
    #[inline]
    pub fn read_i16(&mut self, context: &'static str) -> Result<i16, DecodeError> {
        Ok(i16::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a big-endian i32.
    #[inline]
    pub fn read_i32(&mut self, context: &'static str) -> Result<i32, DecodeError> {
        Ok(i32::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a big-endian i64.
    #[inline]
    pub fn read_i64(&mut self, context: &'static str) -> Result<i64, DecodeError> {
        Ok(i64::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a big-endian f32. NaN payloads are preserved bit for bit.
    #[inline]
    pub fn read_f32(&mut self, context: &'static str) -> Result<f32, DecodeError> {
        Ok(f32::from_bits(u32::from_be_bytes(self.read_array(context)?)))
    }

    /// Reads a big-endian f64. NaN payloads are preserved bit for bit.
    #[inline]
    pub fn read_f64(&mut self, context: &'static str) -> Result<f64, DecodeError> {
        Ok(f64::from_bits(u64::from_be_bytes(self.read_array(context)?)))
    }

    /// Reads an i16-length-prefixed UTF-8 string.
    pub fn read_string(&mut self, field: &'static str) -> Result<String, DecodeError> {
        let len = self.read_i16(field)?;
        if len < 0 {
            return Err(DecodeError::NegativeLength {
                field,
                len: len as i32,
            });
        }
        let bytes = self.read_bytes(len as usize, field)?;
        // Validate UTF-8 on borrowed slice, then allocate once
        std::str::from_utf8(bytes)
            .map(|s| s.to_string())
            .map_err(|_| DecodeError::InvalidUtf8 { field })
    }

    /// Reads an i32 element count, rejecting negative values and values
    /// above `max`.
    pub fn read_len(&mut self, max: usize, field: &'static str) -> Result<usize, DecodeError> {
        let len = self.read_i32(field)?;
        if len < 0 {
            return Err(DecodeError::NegativeLength { field, len });
        }
        let len = len as usize;
        if len > max {
            return Err(DecodeError::LengthExceedsLimit { field, len, max });
        }
        Ok(len)
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding binary data.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a signed byte.
    #[inline]
    pub fn write_i8(&mut self, value: i8) {
        self.buf.push(value as u8);
    }

    /// Writes a big-endian i16.
    #[inline]
    pub fn write_i16(&mut self, value: i16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian i32.
    #[inline]
    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian i64.
    #[inline]
    pub fn write_i64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian f32.
    #[inline]
    pub fn write_f32(&mut self, value: f32) {
        self.buf.extend_from_slice(&value.to_bits().to_be_bytes());
    }

    /// Writes a big-endian f64.
    #[inline]
    pub fn write_f64(&mut self, value: f64) {
        self.buf.extend_from_slice(&value.to_bits().to_be_bytes());
    }

    /// Writes an i16-length-prefixed UTF-8 string.
    ///
    /// The length counts bytes, not characters; anything above 32767 bytes
    /// is rejected rather than truncated.
    pub fn write_string(&mut self, s: &str) -> Result<(), EncodeError> {
        let len = s.len();
        if len > MAX_STRING_LEN {
            return Err(EncodeError::StringTooLong { len });
        }
        self.write_i16(len as i16);
        self.buf.extend_from_slice(s.as_bytes());
        Ok(())
    }

    /// Writes an i32 element count.
    pub fn write_len(&mut self, len: usize, field: &'static str) -> Result<(), EncodeError> {
        let len = i32::try_from(len).map_err(|_| EncodeError::LengthExceedsLimit {
            field,
            len,
            max: i32::MAX as usize,
        })?;
        self.write_i32(len);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_endian_layout() {
        let mut writer = Writer::new();
        writer.write_i16(0x0102);
        writer.write_i32(0x03040506);
        writer.write_i64(-2);
        assert_eq!(
            writer.as_bytes(),
            &[1, 2, 3, 4, 5, 6, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe]
        );
    }

    #[test]
    fn test_integer_roundtrip() {
        let mut writer = Writer::new();
        writer.write_i8(i8::MIN);
        writer.write_i16(i16::MIN);
        writer.write_i32(i32::MAX);
        writer.write_i64(i64::MIN);

        let mut reader = Reader::new(writer.as_bytes());
        assert_eq!(reader.read_i8("test").unwrap(), i8::MIN);
        assert_eq!(reader.read_i16("test").unwrap(), i16::MIN);
        assert_eq!(reader.read_i32("test").unwrap(), i32::MAX);
        assert_eq!(reader.read_i64("test").unwrap(), i64::MIN);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_float_bits_preserved() {
        let values = [0.0f64, -0.0, 1.5, f64::INFINITY, f64::NEG_INFINITY, f64::NAN];

        for v in values {
            let mut writer = Writer::new();
            writer.write_f64(v);
            writer.write_f32(v as f32);

            let mut reader = Reader::new(writer.as_bytes());
            assert_eq!(reader.read_f64("test").unwrap().to_bits(), v.to_bits());
            assert_eq!(reader.read_f32("test").unwrap().to_bits(), (v as f32).to_bits());
        }
    }

    #[test]
    fn test_string_roundtrip() {
        let test_strings = ["", "hello", "こんにちは世界", "unicode: \u{1F600}"];

        for s in test_strings {
            let mut writer = Writer::new();
            writer.write_string(s).unwrap();
            assert_eq!(writer.len(), 2 + s.len());

            let mut reader = Reader::new(writer.as_bytes());
            let decoded = reader.read_string("test").unwrap();
            assert_eq!(s, decoded);
        }
    }

    #[test]
    fn test_string_length_counts_bytes() {
        let s = "é".repeat(16384);
        assert_eq!(s.chars().count(), 16384);
        let mut writer = Writer::new();
        let result = writer.write_string(&s);
        assert!(matches!(result, Err(EncodeError::StringTooLong { len: 32768 })));
    }

    #[test]
    fn test_negative_string_length() {
        let data = [0xff, 0xff, b'a'];
        let mut reader = Reader::new(&data);
        let result = reader.read_string("test");
        assert!(matches!(result, Err(DecodeError::NegativeLength { len: -1, .. })));
    }

    #[test]
    fn test_invalid_utf8() {
        let data = [0x00, 0x02, 0xc3, 0x28];
        let mut reader = Reader::new(&data);
        let result = reader.read_string("test");
        assert!(matches!(result, Err(DecodeError::InvalidUtf8 { .. })));
    }

    #[test]
    fn test_read_len_limits() {
        let mut reader = Reader::new(&[0x80, 0, 0, 0]);
        assert!(matches!(
            reader.read_len(100, "test"),
            Err(DecodeError::NegativeLength { .. })
        ));

        let mut reader = Reader::new(&[0, 0, 1, 0]);
        assert!(matches!(
            reader.read_len(100, "test"),
            Err(DecodeError::LengthExceedsLimit { len: 256, max: 100, .. })
        ));
    }

    #[test]
    fn test_unexpected_eof() {
        let data = [0u8; 5];
        let mut reader = Reader::new(&data);
        let result = reader.read_bytes(10, "test");
        assert!(matches!(result, Err(DecodeError::TruncatedInput { .. })));
        assert_eq!(reader.position(), 0);
    }
}
