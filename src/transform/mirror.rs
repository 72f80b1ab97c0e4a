//! In-place mirroring.

use enough::Stop;

use crate::bitmap::Bitmap;
use crate::error::BmpError;
use crate::transform::Axis;

/// Mirror the image across the given axis, in place.
///
/// [`Axis::Horizontal`] reverses the stored row order; each row's bytes,
/// padding included, move as one unit. [`Axis::Vertical`] reverses the
/// 3-byte pixel groups within each row's pixel-bearing span, leaving the
/// padding bytes where they are. Both are involutions.
pub fn mirror(bitmap: &mut Bitmap, axis: Axis, stop: impl Stop) -> Result<(), BmpError> {
    stop.check()?;
    match axis {
        Axis::Horizontal => flip_rows(bitmap),
        Axis::Vertical => flip_row_pixels(bitmap),
    }
    Ok(())
}

fn flip_rows(bitmap: &mut Bitmap) {
    let row_size = bitmap.row_size();
    if row_size == 0 {
        return;
    }
    let height = bitmap.pixels.len() / row_size;
    let (front, back) = bitmap.pixels.split_at_mut(height / 2 * row_size);
    // Pair row i with row height-1-i; zip ends before an odd middle row.
    for (a, b) in front
        .chunks_exact_mut(row_size)
        .zip(back.chunks_exact_mut(row_size).rev())
    {
        a.swap_with_slice(b);
    }
}

fn flip_row_pixels(bitmap: &mut Bitmap) {
    let row_size = bitmap.row_size();
    if row_size == 0 {
        return;
    }
    let span = bitmap.pixel_span();
    for row in bitmap.pixels.chunks_exact_mut(row_size) {
        reverse_pixel_groups(&mut row[..span]);
    }
}

/// Reverse 3-byte groups in place; bytes inside each group keep their
/// (B, G, R) order.
fn reverse_pixel_groups(span: &mut [u8]) {
    let pixels = span.len() / 3;
    let (front, back) = span.split_at_mut(pixels / 2 * 3);
    for (a, b) in front
        .chunks_exact_mut(3)
        .zip(back.chunks_exact_mut(3).rev())
    {
        a.swap_with_slice(b);
    }
}
