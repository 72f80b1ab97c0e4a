//! The in-memory bitmap value: headers, pixel array, and unused regions.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::BmpError;
use crate::header::{self, DibHeader, FileHeader, HEADERS_LEN};

/// A decoded BMP file, byte-complete.
///
/// Everything [`decode`](crate::decode) reads is held here: both headers
/// field by field, the unused regions verbatim, and the padded pixel rows
/// in file order (bottom scanline first, blue byte first in each pixel).
/// [`encode`](crate::encode) writes the fields back as they stand, so an
/// untouched `Bitmap` reproduces its source bytes exactly.
///
/// All fields are public; transforms mutate `pixels` in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pub file_header: FileHeader,
    pub dib_header: DibHeader,
    /// Bytes between the interpreted headers and the pixel array: extended
    /// DIB header tails, color tables. Carried, never interpreted.
    pub gap: Vec<u8>,
    /// `height` rows of `row_size()` bytes each, in file order. Each row is
    /// `width` (B, G, R) triples followed by padding to a 4-byte boundary.
    pub pixels: Vec<u8>,
    /// Bytes after the pixel array, up to the declared file size (ICC
    /// profiles, editor leftovers). Carried, never interpreted.
    pub trailer: Vec<u8>,
}

impl Bitmap {
    /// Build a zeroed 24-bit bitmap with a bare 54-byte header: pixel
    /// array at offset 54, no gap, no trailer, 72 DPI.
    pub fn new(width: u32, height: u32) -> Result<Bitmap, BmpError> {
        let row_size = header::row_size_checked(width, height)?;
        let pixel_bytes = row_size
            .checked_mul(height as usize)
            .ok_or(BmpError::DimensionsTooLarge { width, height })?;
        let file_size = pixel_bytes
            .checked_add(HEADERS_LEN)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(BmpError::DimensionsTooLarge { width, height })?;

        Ok(Bitmap {
            file_header: FileHeader {
                file_size,
                reserved1: 0,
                reserved2: 0,
                pixel_offset: HEADERS_LEN as u32,
            },
            dib_header: DibHeader {
                header_size: 40,
                width,
                height,
                planes: 1,
                bits_per_pixel: 24,
                compression: 0,
                image_size: pixel_bytes as u32,
                x_pixels_per_meter: 2835, // 72 DPI
                y_pixels_per_meter: 2835,
                palette_colors: 0,
                important_colors: 0,
            },
            gap: Vec::new(),
            pixels: vec![0; pixel_bytes],
            trailer: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.dib_header.width
    }

    pub fn height(&self) -> u32 {
        self.dib_header.height
    }

    /// Bytes per stored row: `width * 3` rounded up to a multiple of 4.
    pub fn row_size(&self) -> usize {
        (self.dib_header.width as usize * 3 + 3) & !3
    }

    /// Length of the pixel-bearing span of a row, excluding padding.
    pub(crate) fn pixel_span(&self) -> usize {
        self.dib_header.width as usize * 3
    }

    /// Row `y` in file order (0 is the bottom scanline), padding included.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        let rs = self.row_size();
        let start = y.checked_mul(rs)?;
        self.pixels.get(start..start.checked_add(rs)?)
    }

    /// Mutable [`row`](Bitmap::row).
    pub fn row_mut(&mut self, y: usize) -> Option<&mut [u8]> {
        let rs = self.row_size();
        let start = y.checked_mul(rs)?;
        self.pixels.get_mut(start..start.checked_add(rs)?)
    }

    /// Iterate rows in file order. Zero-width bitmaps yield no rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // max(1): chunks_exact rejects a zero chunk size; with zero-width
        // rows the pixel buffer is empty and the iterator stays empty.
        self.pixels.chunks_exact(self.row_size().max(1))
    }

    /// Mutable [`rows`](Bitmap::rows).
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        let rs = self.row_size().max(1);
        self.pixels.chunks_exact_mut(rs)
    }
}

// ── Typed pixel views ───────────────────────────────────────────────

#[cfg(feature = "rgb")]
impl Bitmap {
    /// Row `y`'s pixels as typed [`BGR8`](rgb::alt::BGR8) values. The
    /// view covers the pixel-bearing span only; padding is unreachable
    /// through it.
    pub fn row_pixels(&self, y: usize) -> Option<&[rgb::alt::BGR8]> {
        use rgb::AsPixels;
        let span = self.pixel_span();
        Some(self.row(y)?[..span].as_pixels())
    }

    /// Mutable [`row_pixels`](Bitmap::row_pixels).
    pub fn row_pixels_mut(&mut self, y: usize) -> Option<&mut [rgb::alt::BGR8]> {
        use rgb::AsPixels;
        let span = self.pixel_span();
        Some(self.row_mut(y)?[..span].as_pixels_mut())
    }
}

#[cfg(feature = "imgref")]
impl Bitmap {
    /// Copy the pixels into a top-down [`ImgVec`](imgref::ImgVec)
    /// (display row order, no padding).
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::alt::BGR8> {
        use rgb::AsPixels;
        let rs = self.row_size();
        let w = self.dib_header.width as usize;
        // Zero-width rows occupy no bytes, so the row count must come from
        // the header rather than the buffer.
        let h = if rs == 0 {
            self.dib_header.height as usize
        } else {
            self.pixels.len() / rs
        };
        let span = w * 3;
        let mut buf: Vec<rgb::alt::BGR8> = Vec::with_capacity(w * h);
        // File order is bottom-up; the displayed top row is stored last.
        for row in self.pixels.chunks_exact(rs.max(1)).rev() {
            buf.extend_from_slice(row[..span].as_pixels());
        }
        if w == 0 {
            // ImgVec rejects a zero stride outright, even for images that
            // hold no pixels.
            return imgref::ImgVec::new_stride(buf, w, h, 1);
        }
        imgref::ImgVec::new(buf, w, h)
    }

    /// Build a fresh bitmap (as by [`Bitmap::new`]) from top-down pixels.
    pub fn from_imgref(img: imgref::ImgRef<'_, rgb::alt::BGR8>) -> Result<Bitmap, BmpError> {
        use rgb::ComponentBytes;
        let width = u32::try_from(img.width()).map_err(|_| BmpError::DimensionsTooLarge {
            width: u32::MAX,
            height: u32::MAX,
        })?;
        let height = u32::try_from(img.height()).map_err(|_| BmpError::DimensionsTooLarge {
            width: u32::MAX,
            height: u32::MAX,
        })?;
        let mut bitmap = Bitmap::new(width, height)?;
        let rs = bitmap.row_size();
        let span = bitmap.pixel_span();
        let h = img.height();
        for (y, row) in img.rows().enumerate() {
            let start = (h - 1 - y) * rs;
            bitmap.pixels[start..start + span].copy_from_slice(row.as_bytes());
        }
        Ok(bitmap)
    }
}
