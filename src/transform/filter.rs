//! Color filters: channel retention, grayscale, negative, sepia, box blur.

use enough::Stop;

use crate::bitmap::Bitmap;
use crate::error::BmpError;
use crate::transform::{BlurSize, Filter};

/// Sepia sums may land a hair above 255.0; past this tolerance they clamp.
const SEPIA_EPS: f32 = 0.01;

/// Apply a color filter to every pixel, in place.
///
/// Every filter touches pixel-bearing bytes only; padding is never read
/// as color data and never written. Blur computes into a fresh buffer so
/// neighbor reads always see original values, and swaps it in only on
/// completion.
pub fn filter(bitmap: &mut Bitmap, kind: Filter, stop: impl Stop) -> Result<(), BmpError> {
    stop.check()?;
    match kind {
        Filter::Blur(size) => return blur(bitmap, size, &stop),
        // Recognized name, deliberately a passthrough.
        Filter::Pixelate => {}
        Filter::RedOnly => pointwise(bitmap, |px| {
            px[0] = 0;
            px[1] = 0;
        }),
        Filter::GreenOnly => pointwise(bitmap, |px| {
            px[0] = 0;
            px[2] = 0;
        }),
        Filter::BlueOnly => pointwise(bitmap, |px| {
            px[1] = 0;
            px[2] = 0;
        }),
        Filter::Grayscale => pointwise(bitmap, grayscale),
        Filter::Negative => pointwise(bitmap, |px| {
            for c in px.iter_mut() {
                *c = 255 - *c;
            }
        }),
        Filter::Sepia => pointwise(bitmap, sepia),
    }
    Ok(())
}

/// Run `op` over every 3-byte (B, G, R) group, skipping row padding.
fn pointwise(bitmap: &mut Bitmap, op: impl Fn(&mut [u8])) {
    let row_size = bitmap.row_size();
    if row_size == 0 {
        return;
    }
    let span = bitmap.pixel_span();
    for row in bitmap.pixels.chunks_exact_mut(row_size) {
        for px in row[..span].chunks_exact_mut(3) {
            op(px);
        }
    }
}

fn grayscale(px: &mut [u8]) {
    // Standard weighted method: blue 11%, green 59%, red 30%, truncated.
    let luma = (0.11 * f32::from(px[0]) + 0.59 * f32::from(px[1]) + 0.30 * f32::from(px[2])) as u8;
    px.fill(luma);
}

fn sepia(px: &mut [u8]) {
    // All three outputs read the original triple; nothing is computed
    // from a partially rewritten pixel.
    let (b, g, r) = (f32::from(px[0]), f32::from(px[1]), f32::from(px[2]));
    px[0] = clamp255(0.272 * r + 0.534 * g + 0.131 * b);
    px[1] = clamp255(0.349 * r + 0.686 * g + 0.168 * b);
    px[2] = clamp255(0.393 * r + 0.769 * g + 0.189 * b);
}

fn clamp255(v: f32) -> u8 {
    if v - 255.0 > SEPIA_EPS { 255 } else { v as u8 }
}

/// Unweighted box average. Each channel of each output pixel is the mean
/// of that channel over the neighbors that exist inside the image, so
/// edge and corner pixels average fewer samples instead of darkening
/// toward phantom zero neighbors.
fn blur(bitmap: &mut Bitmap, size: BlurSize, stop: &dyn Stop) -> Result<(), BmpError> {
    let row_size = bitmap.row_size();
    if row_size == 0 || bitmap.pixels.is_empty() {
        return Ok(());
    }
    let w = bitmap.dib_header.width as usize;
    let h = bitmap.pixels.len() / row_size;
    let reach = size.kernel() / 2;

    // Clone keeps the padding bytes; only pixel spans are overwritten.
    let mut out = bitmap.pixels.clone();
    for y in 0..h {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..w {
            let mut sum = [0u32; 3];
            let mut count = 0u32;
            for ny in y.saturating_sub(reach)..=(y + reach).min(h - 1) {
                for nx in x.saturating_sub(reach)..=(x + reach).min(w - 1) {
                    let off = ny * row_size + nx * 3;
                    sum[0] += u32::from(bitmap.pixels[off]);
                    sum[1] += u32::from(bitmap.pixels[off + 1]);
                    sum[2] += u32::from(bitmap.pixels[off + 2]);
                    count += 1;
                }
            }
            let off = y * row_size + x * 3;
            out[off] = (sum[0] / count) as u8;
            out[off + 1] = (sum[1] / count) as u8;
            out[off + 2] = (sum[2] / count) as u8;
        }
    }
    bitmap.pixels = out;
    Ok(())
}
