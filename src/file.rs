//! Whole-file helpers (`std` only): one read or write per call.

use std::path::Path;

use enough::Stop;

use crate::bitmap::Bitmap;
use crate::error::BmpError;

/// Read a BMP file from disk and decode it.
pub fn decode_file(path: impl AsRef<Path>, stop: impl Stop) -> Result<Bitmap, BmpError> {
    let data = std::fs::read(path)?;
    crate::decode(&data, stop)
}

/// Encode a bitmap and write it to disk.
pub fn encode_file(
    bitmap: &Bitmap,
    path: impl AsRef<Path>,
    stop: impl Stop,
) -> Result<(), BmpError> {
    let bytes = crate::encode(bitmap, stop)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
