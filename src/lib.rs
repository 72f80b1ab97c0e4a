//! # zenbmp
//!
//! Decoder, encoder, and in-place pixel transforms for uncompressed
//! 24-bit BMP files.
//!
//! ## Lossless Round-Trip
//!
//! [`decode`] keeps every byte a file declares: all header fields, any gap
//! between the headers and the pixel array (extended DIB variants, color
//! tables), row padding, and trailing data such as ICC profiles. [`encode`]
//! writes the fields back as they stand, so an unmodified decode result
//! re-encodes to the input byte for byte.
//!
//! ## Transforms
//!
//! [`mirror`] flips the image across either axis. [`filter`] applies a
//! named pixel filter: channel isolation, grayscale, negative, sepia, or a
//! box blur ([`Filter::Blur`]). Transforms edit pixel bytes in place and
//! never touch headers, row padding, or trailing data.
//!
//! ## Cargo Features
//!
//! - `std`: `decode_file` / `encode_file` path helpers and an I/O error
//!   variant
//! - `rgb`: typed `BGR8` row views on [`Bitmap`]
//! - `imgref`: `ImgVec` conversions (implies `rgb`)
//!
//! ## Non-Goals
//!
//! - Compressed pixel data (RLE, bitfields) and depths other than 24-bit
//! - Interpreting palettes, extended DIB headers, or ICC trailers; these
//!   round-trip as opaque bytes
//! - Color management
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmp::{decode, encode, filter, mirror, Axis, BmpInfo, Filter};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Probe the headers without decoding pixels
//! let info = BmpInfo::from_bytes(data).unwrap();
//! println!("{}x{} {}bpp", info.width, info.height, info.bits_per_pixel);
//!
//! // Decode, transform in place, re-encode
//! let mut bitmap = decode(data, Unstoppable)?;
//! mirror(&mut bitmap, Axis::Horizontal, Unstoppable)?;
//! filter(&mut bitmap, "sepia".parse::<Filter>()?, Unstoppable)?;
//! let out = encode(&bitmap, Unstoppable)?;
//! # Ok::<(), zenbmp::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bitmap;
mod decode;
mod encode;
mod error;
mod header;
mod info;
mod limits;
mod transform;

#[cfg(feature = "std")]
mod file;

// Re-exports
pub use bitmap::Bitmap;
pub use decode::{decode, decode_with_limits};
pub use encode::encode;
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
#[cfg(feature = "std")]
pub use file::{decode_file, encode_file};
pub use header::{DibHeader, FileHeader};
pub use info::BmpInfo;
pub use limits::Limits;
pub use transform::{Axis, BlurSize, Filter, filter, mirror};
