//! BMP encoder: serializes a [`Bitmap`] back to bytes, as stored.

use alloc::vec::Vec;
use enough::Stop;

use crate::bitmap::Bitmap;
use crate::error::BmpError;
use crate::header::HEADERS_LEN;

/// Serialize a bitmap to BMP bytes.
///
/// A pure serializer: header fields, gap, pixel rows, and trailer are
/// written exactly as stored, with no size field re-derived from the
/// current pixel array shape. Decoding and immediately encoding therefore
/// reproduces the source bytes; a caller that edits headers or buffers
/// inconsistently gets those edits back verbatim.
pub fn encode(bitmap: &Bitmap, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
    encode_inner(bitmap, &stop)
}

fn encode_inner(bitmap: &Bitmap, stop: &dyn Stop) -> Result<Vec<u8>, BmpError> {
    stop.check()?;
    let total = HEADERS_LEN + bitmap.gap.len() + bitmap.pixels.len() + bitmap.trailer.len();
    let mut out = Vec::with_capacity(total);

    bitmap.file_header.write_to(&mut out);
    bitmap.dib_header.write_to(&mut out);
    out.extend_from_slice(&bitmap.gap);

    // chunks (not chunks_exact): a pixel buffer whose length is not a
    // row multiple still serializes byte for byte.
    let row_size = bitmap.row_size().max(1);
    for (row_idx, row) in bitmap.pixels.chunks(row_size).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row);
    }

    out.extend_from_slice(&bitmap.trailer);
    Ok(out)
}
