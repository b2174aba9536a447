//! Pixmap data types

/// Header fields of a binary pixmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpmHeader {
    /// Format version from the magic tag (6 for binary RGB)
    pub version: u32,
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Maximum channel value declared by the header (nominally 255)
    pub max_value: u32,
}

/// Decoded interleaved RGB image data
#[derive(Debug, Clone)]
pub struct RgbImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Maximum channel value carried over from the source header
    pub max_value: u32,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...]
    pub data: Vec<u8>,
}

impl RgbImage {
    /// Number of pixels in the image
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}
