//! Compression wrappers around encoded documents.
//!
//! The codec itself only deals in plain bytes. Documents on disk are
//! usually gzip-compressed; zstd is offered as a denser alternative. On the
//! way in, the container is detected from its magic bytes.

use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use tracing::debug;

use crate::codec::{decode, encode};
use crate::error::{DecodeError, EncodeError};
use crate::limits::MAX_DECOMPRESSED_SIZE;
use crate::model::Compound;

/// gzip member header.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// zstd frame header.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xb5, 0x2f, 0xfd];

/// Compression applied to an encoded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// Plain bytes.
    None,
    /// gzip, level 0-9.
    Gzip { level: u32 },
    /// zstd, level 1-22.
    Zstd { level: i32 },
}

impl Default for Compression {
    fn default() -> Self {
        Compression::Gzip { level: 6 }
    }
}

/// Compresses `data` with the given container.
pub fn compress(data: &[u8], compression: Compression) -> Result<Vec<u8>, EncodeError> {
    let out = match compression {
        Compression::None => data.to_vec(),
        Compression::Gzip { level } => {
            let mut encoder = GzEncoder::new(
                Vec::with_capacity(data.len() / 2 + 32),
                flate2::Compression::new(level),
            );
            encoder
                .write_all(data)
                .map_err(|e| EncodeError::CompressionFailed(e.to_string()))?;
            encoder
                .finish()
                .map_err(|e| EncodeError::CompressionFailed(e.to_string()))?
        }
        Compression::Zstd { level } => zstd::encode_all(data, level)
            .map_err(|e| EncodeError::CompressionFailed(e.to_string()))?,
    };
    debug!(?compression, input = data.len(), output = out.len(), "compressed document");
    Ok(out)
}

/// Container format of a stored document, as recognized from its header.
///
/// Unlike [`Compression`] this carries no level: the level a stream was
/// written with is not recorded in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// No recognized header; plain bytes.
    Raw,
    Gzip,
    Zstd,
}

/// Detects the container of `data` from its magic bytes.
pub fn detect(data: &[u8]) -> Container {
    if data.starts_with(&GZIP_MAGIC) {
        Container::Gzip
    } else if data.starts_with(&ZSTD_MAGIC) {
        Container::Zstd
    } else {
        Container::Raw
    }
}

/// Decompresses gzip or zstd input; anything else is returned unchanged.
///
/// Output larger than [`MAX_DECOMPRESSED_SIZE`] is rejected.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let out = match detect(data) {
        Container::Raw => return Ok(data.to_vec()),
        Container::Gzip => read_bounded(GzDecoder::new(data))?,
        Container::Zstd => {
            let decoder = zstd::Decoder::new(data)
                .map_err(|e| DecodeError::DecompressionFailed(e.to_string()))?;
            read_bounded(decoder)?
        }
    };
    debug!(input = data.len(), output = out.len(), "decompressed document");
    Ok(out)
}

fn read_bounded<R: Read>(decoder: R) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::new();
    // One byte past the limit tells an exact-size document from an oversized one.
    decoder
        .take(MAX_DECOMPRESSED_SIZE as u64 + 1)
        .read_to_end(&mut out)
        .map_err(|e| DecodeError::DecompressionFailed(e.to_string()))?;
    if out.len() > MAX_DECOMPRESSED_SIZE {
        return Err(DecodeError::LengthExceedsLimit {
            field: "decompressed document",
            len: out.len(),
            max: MAX_DECOMPRESSED_SIZE,
        });
    }
    Ok(out)
}

/// Encodes a root compound and compresses the result.
pub fn encode_compressed(
    root: &Compound,
    name: &str,
    compression: Compression,
) -> Result<Vec<u8>, EncodeError> {
    let uncompressed = encode(root, name)?;
    compress(&uncompressed, compression)
}

/// Decompresses (if needed) and decodes a document.
pub fn decode_compressed(data: &[u8]) -> Result<Compound, DecodeError> {
    let uncompressed = decompress(data)?;
    decode(&uncompressed)
}

/// Reads a possibly compressed document from a byte source.
pub fn decode_compressed_reader<R: Read>(mut source: R) -> Result<Compound, DecodeError> {
    let mut buf = Vec::new();
    source
        .read_to_end(&mut buf)
        .map_err(|e| DecodeError::Io(e.to_string()))?;
    decode_compressed(&buf)
}
