//! Pixel transforms over decoded bitmaps.
//!
//! Operation selection is a closed enum, validated once when parsing the
//! user-facing string value; past that boundary every match is exhaustive.

mod filter;
mod mirror;

pub use filter::filter;
pub use mirror::mirror;

use alloc::string::ToString;
use core::str::FromStr;

use crate::error::BmpError;

/// Mirror axis.
///
/// Named for the axis the image flips across: `Horizontal` turns the
/// image upside down (rows reverse), `Vertical` flips it left to right
/// (pixels reverse within each row).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl FromStr for Axis {
    type Err = BmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" | "hor" | "horizontal" | "horizontally" => Ok(Axis::Horizontal),
            "v" | "ver" | "vertical" | "vertically" => Ok(Axis::Vertical),
            other => Err(BmpError::InvalidAxis(other.to_string())),
        }
    }
}

/// Pixel filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    /// Keep the red channel, zero blue and green.
    RedOnly,
    /// Keep the green channel, zero blue and red.
    GreenOnly,
    /// Keep the blue channel, zero green and red.
    BlueOnly,
    /// Weighted-average grayscale (red 30%, green 59%, blue 11%).
    Grayscale,
    /// Invert every channel.
    Negative,
    /// Reddish-brown tone via the classic sepia matrix.
    Sepia,
    /// Accepted for compatibility; currently leaves pixels untouched.
    Pixelate,
    /// Box blur over a square neighborhood.
    Blur(BlurSize),
}

impl FromStr for Filter {
    type Err = BmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Filter::RedOnly),
            "green" => Ok(Filter::GreenOnly),
            "blue" => Ok(Filter::BlueOnly),
            "grayscale" => Ok(Filter::Grayscale),
            "negative" => Ok(Filter::Negative),
            "sepia" => Ok(Filter::Sepia),
            "pixelate" => Ok(Filter::Pixelate),
            "blur" => Ok(Filter::Blur(BlurSize::default())),
            other => Err(BmpError::InvalidFilterKind(other.to_string())),
        }
    }
}

/// Blur neighborhood side length. A closed set: kernels stay small enough
/// that edge handling (partial neighborhoods) dominates the cost model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BlurSize {
    /// 3x3 neighborhood, the tight default.
    #[default]
    Three,
    /// 5x5 neighborhood.
    Five,
}

impl BlurSize {
    pub(crate) fn kernel(self) -> usize {
        match self {
            BlurSize::Three => 3,
            BlurSize::Five => 5,
        }
    }
}
