//! BMP decoder: uncompressed 24-bit, with verbatim capture of the
//! regions this crate does not interpret.

use alloc::vec::Vec;
use enough::Stop;

use crate::bitmap::Bitmap;
use crate::error::BmpError;
use crate::header::{self, Cursor, DibHeader, FileHeader, HEADERS_LEN};
use crate::limits::Limits;

/// Decode a BMP file held in memory.
///
/// Keeps every byte the headers declare: the header gap and trailer are
/// captured verbatim so [`encode`](crate::encode) can reproduce the input
/// exactly. Input past the declared file size is ignored.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<Bitmap, BmpError> {
    decode_inner(data, None, &stop)
}

/// [`decode`] with resource limits checked before pixel allocation.
pub fn decode_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<Bitmap, BmpError> {
    decode_inner(data, Some(limits), &stop)
}

fn decode_inner(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Bitmap, BmpError> {
    let mut cur = Cursor::new(data);
    let file_header = FileHeader::parse(&mut cur)?;
    let dib_header = DibHeader::parse(&mut cur)?;
    stop.check()?;

    // Whatever lies between the interpreted headers and the pixel array
    // (longer DIB variants, color tables) is carried, not parsed.
    let gap_len = (file_header.pixel_offset as usize)
        .checked_sub(HEADERS_LEN)
        .ok_or_else(|| {
            BmpError::CorruptSizeFields(alloc::format!(
                "pixel array offset {} points inside the {HEADERS_LEN}-byte headers",
                file_header.pixel_offset
            ))
        })?;
    if let Some(limits) = limits {
        limits.check_memory(gap_len)?;
    }
    let gap = cur.take(gap_len)?.to_vec();

    if !dib_header.is_supported() {
        return Err(BmpError::UnsupportedPixelFormat {
            bits_per_pixel: dib_header.bits_per_pixel,
            compression: dib_header.compression,
        });
    }

    let (width, height) = (dib_header.width, dib_header.height);
    if let Some(limits) = limits {
        limits.check(width, height)?;
    }
    let row_size = header::row_size_checked(width, height)?;
    let pixel_bytes = row_size
        .checked_mul(height as usize)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    if let Some(limits) = limits {
        limits.check_memory(pixel_bytes)?;
    }

    let pixel_data = cur.take(pixel_bytes)?;
    let mut pixels = Vec::with_capacity(pixel_bytes);
    // max(1): chunks_exact rejects a zero chunk size; zero-width rows
    // have no pixel data anyway.
    for (row_idx, row) in pixel_data.chunks_exact(row_size.max(1)).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        pixels.extend_from_slice(row);
    }

    // Trailer length follows from the declared sizes alone: whatever the
    // file size claims exists beyond headers, gap, and declared image
    // size. The image size field is trusted here, not recomputed.
    let trailer_len = file_header
        .file_size
        .checked_sub(dib_header.image_size)
        .and_then(|n| n.checked_sub(gap_len as u32))
        .and_then(|n| n.checked_sub(HEADERS_LEN as u32))
        .ok_or_else(|| {
            BmpError::CorruptSizeFields(alloc::format!(
                "file size {} is smaller than headers plus declared image size {}",
                file_header.file_size, dib_header.image_size
            ))
        })? as usize;
    if let Some(limits) = limits {
        limits.check_memory(trailer_len)?;
    }
    let trailer = cur.take(trailer_len)?.to_vec();
    stop.check()?;

    Ok(Bitmap {
        file_header,
        dib_header,
        gap,
        pixels,
        trailer,
    })
}
