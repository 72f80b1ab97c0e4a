use crate::error::BmpError;
use crate::header::{Cursor, DibHeader, FileHeader};

/// Header fields read without touching pixel data.
///
/// Unlike [`decode`](crate::decode), this works for any bit depth or
/// compression method, so headers of files rejected as
/// [`UnsupportedPixelFormat`](BmpError::UnsupportedPixelFormat) can still
/// be inspected. Fails only on a bad signature or input shorter than the
/// 54 header bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpInfo {
    pub file_size: u32,
    pub pixel_offset: u32,
    pub header_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
}

impl BmpInfo {
    /// Probe the 54 header bytes.
    pub fn from_bytes(data: &[u8]) -> Result<BmpInfo, BmpError> {
        let mut cur = Cursor::new(data);
        let file_header = FileHeader::parse(&mut cur)?;
        let dib_header = DibHeader::parse(&mut cur)?;
        Ok(BmpInfo {
            file_size: file_header.file_size,
            pixel_offset: file_header.pixel_offset,
            header_size: dib_header.header_size,
            width: dib_header.width,
            height: dib_header.height,
            planes: dib_header.planes,
            bits_per_pixel: dib_header.bits_per_pixel,
            compression: dib_header.compression,
            image_size: dib_header.image_size,
        })
    }

    /// Whether [`decode`](crate::decode) would accept the pixel format.
    pub fn is_supported(&self) -> bool {
        self.bits_per_pixel == 24 && self.compression == 0
    }
}
