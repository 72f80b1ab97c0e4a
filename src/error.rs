use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding, encoding, and pixel transforms.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    /// The first two bytes are not `BM`. No headers are returned.
    #[error("not a BMP file: bad signature")]
    InvalidSignature,

    /// Input ended before a region it declares.
    #[error("unexpected end of input: need {needed} bytes, {remaining} left")]
    Truncated { needed: usize, remaining: usize },

    /// Declared sizes contradict each other (offset inside the headers,
    /// file size too small for its own contents).
    #[error("inconsistent size fields: {0}")]
    CorruptSizeFields(String),

    /// Recognized BMP, but not uncompressed 24-bit. Headers are still
    /// readable via [`BmpInfo::from_bytes`](crate::BmpInfo::from_bytes).
    #[error("unsupported pixel format: {bits_per_pixel} bpp, compression {compression}")]
    UnsupportedPixelFormat { bits_per_pixel: u16, compression: u32 },

    /// A mirror axis string that names no [`Axis`](crate::Axis).
    #[error("unknown mirror axis {0:?}")]
    InvalidAxis(String),

    /// A filter string that names no [`Filter`](crate::Filter).
    #[error("unknown filter {0:?}")]
    InvalidFilterKind(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}
