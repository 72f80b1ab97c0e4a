//! BMP file and DIB header records with explicit little-endian field I/O.

use alloc::vec::Vec;

use crate::error::BmpError;

/// Fixed file header length, including the 2-byte `BM` signature.
pub(crate) const FILE_HEADER_LEN: usize = 14;
/// Interpreted DIB header length (BITMAPINFOHEADER). Longer DIB variants
/// declare their extra bytes in `header_size`; those land in the gap.
pub(crate) const DIB_HEADER_LEN: usize = 40;
/// Both fixed headers together. The pixel array offset counts from the
/// start of the file, so a well-formed offset is at least this.
pub(crate) const HEADERS_LEN: usize = FILE_HEADER_LEN + DIB_HEADER_LEN;

const SIGNATURE: &[u8; 2] = b"BM";

// ── Cursor ──────────────────────────────────────────────────────────

/// Forward-only reader over the input bytes. Every read is bounds
/// checked; short input reports how much the failing region needed.
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub(crate) fn short(&self, needed: usize) -> BmpError {
        BmpError::Truncated {
            needed,
            remaining: self.remaining(),
        }
    }

    pub(crate) fn read_u16_le(&mut self) -> Result<u16, BmpError> {
        if self.remaining() < 2 {
            return Err(self.short(2));
        }
        let v = u16::from_le_bytes([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        Ok(v)
    }

    pub(crate) fn read_u32_le(&mut self) -> Result<u32, BmpError> {
        if self.remaining() < 4 {
            return Err(self.short(4));
        }
        let v = u32::from_le_bytes([
            self.data[self.pos],
            self.data[self.pos + 1],
            self.data[self.pos + 2],
            self.data[self.pos + 3],
        ]);
        self.pos += 4;
        Ok(v)
    }

    /// Take the next `n` bytes as a slice of the input.
    pub(crate) fn take(&mut self, n: usize) -> Result<&'a [u8], BmpError> {
        if self.remaining() < n {
            return Err(self.short(n));
        }
        let s = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(s)
    }
}

// ── File header ─────────────────────────────────────────────────────

/// The 14-byte BMP file header.
///
/// The `BM` signature is validated on decode and written on encode; it is
/// not a stored field. The reserved words are carried opaquely so they
/// survive the round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    /// Declared total file length in bytes.
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Offset of the pixel array from the start of the file.
    pub pixel_offset: u32,
}

impl FileHeader {
    pub(crate) fn parse(cur: &mut Cursor<'_>) -> Result<Self, BmpError> {
        if cur.remaining() < FILE_HEADER_LEN {
            return Err(cur.short(FILE_HEADER_LEN));
        }
        if cur.take(2)? != SIGNATURE {
            return Err(BmpError::InvalidSignature);
        }
        Ok(FileHeader {
            file_size: cur.read_u32_le()?,
            reserved1: cur.read_u16_le()?,
            reserved2: cur.read_u16_le()?,
            pixel_offset: cur.read_u32_le()?,
        })
    }

    pub(crate) fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(SIGNATURE);
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&self.reserved1.to_le_bytes());
        out.extend_from_slice(&self.reserved2.to_le_bytes());
        out.extend_from_slice(&self.pixel_offset.to_le_bytes());
    }
}

// ── DIB header ──────────────────────────────────────────────────────

/// The first 40 bytes of the DIB header (BITMAPINFOHEADER layout).
///
/// Every field is preserved as declared, including `header_size` values
/// that name a longer header variant; the remainder of such headers is
/// carried in [`Bitmap::gap`](crate::Bitmap::gap). Only `width`, `height`,
/// `bits_per_pixel`, `compression`, and `image_size` steer decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DibHeader {
    pub header_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    /// Declared pixel array length. Trusted for locating the trailer, not
    /// re-derived from `width`/`height`.
    pub image_size: u32,
    pub x_pixels_per_meter: u32,
    pub y_pixels_per_meter: u32,
    pub palette_colors: u32,
    pub important_colors: u32,
}

impl DibHeader {
    pub(crate) fn parse(cur: &mut Cursor<'_>) -> Result<Self, BmpError> {
        if cur.remaining() < DIB_HEADER_LEN {
            return Err(cur.short(DIB_HEADER_LEN));
        }
        Ok(DibHeader {
            header_size: cur.read_u32_le()?,
            width: cur.read_u32_le()?,
            height: cur.read_u32_le()?,
            planes: cur.read_u16_le()?,
            bits_per_pixel: cur.read_u16_le()?,
            compression: cur.read_u32_le()?,
            image_size: cur.read_u32_le()?,
            x_pixels_per_meter: cur.read_u32_le()?,
            y_pixels_per_meter: cur.read_u32_le()?,
            palette_colors: cur.read_u32_le()?,
            important_colors: cur.read_u32_le()?,
        })
    }

    pub(crate) fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.header_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.image_size.to_le_bytes());
        out.extend_from_slice(&self.x_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.y_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.palette_colors.to_le_bytes());
        out.extend_from_slice(&self.important_colors.to_le_bytes());
    }

    /// Whether the pixel array can be decoded (uncompressed 24-bit).
    pub fn is_supported(&self) -> bool {
        self.bits_per_pixel == 24 && self.compression == 0
    }
}

/// Padded row stride for a 24-bit row: `width * 3` rounded up to the next
/// multiple of 4. Fails on arithmetic overflow.
pub(crate) fn row_size_checked(width: u32, height: u32) -> Result<usize, BmpError> {
    (width as usize)
        .checked_mul(3)
        .and_then(|n| n.checked_add(3))
        .map(|n| n & !3)
        .ok_or(BmpError::DimensionsTooLarge { width, height })
}
