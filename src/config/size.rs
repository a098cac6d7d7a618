//! Target canvas dimensions parsed from `WIDTHxHEIGHT`

use std::fmt;
use std::str::FromStr;

use crate::error::{LetterboxError, Result};

/// Message shown for any malformed size string
pub const SIZE_FORMAT_MESSAGE: &str =
    "Size should be specified in '[width]x[height]' format. Example: -s 640x480";

/// Output canvas dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeSpec {
    width: u32,
    height: u32,
}

impl SizeSpec {
    /// Create a size, rejecting zero on either axis
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LetterboxError::invalid_argument(SIZE_FORMAT_MESSAGE));
        }
        Ok(Self { width, height })
    }

    /// Parse a `WIDTHxHEIGHT` string such as `640x480`
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || LetterboxError::invalid_argument(SIZE_FORMAT_MESSAGE);

        let mut parts = s.split('x');
        let (Some(width), Some(height), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let width = width.trim().parse::<u32>().map_err(|_| invalid())?;
        let height = height.trim().parse::<u32>().map_err(|_| invalid())?;

        Self::new(width, height)
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }

    /// Dimensions as a `(width, height)` pair
    pub fn dimensions(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl FromStr for SizeSpec {
    type Err = LetterboxError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
