//! Binary PPM reader implementation.
//!
//! Decodes the `P6` pixmap variant from a byte stream: a textual header
//! followed immediately by `width * height` interleaved RGB triples.

use std::io::Read;

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::ppm::header::{parse_header, BINARY_RGB_VERSION};
use crate::image_pipeline::ppm::reader::PixmapReader;
use crate::image_pipeline::ppm::types::RgbImage;

/// Number of bytes per interleaved RGB pixel.
const BYTES_PER_PIXEL: usize = 3;

/// Stream reader for the binary RGB (`P6`) pixmap variant.
pub struct BinaryPpmReader;

impl PixmapReader for BinaryPpmReader {
    /// Reads and decodes a binary RGB pixmap from a stream.
    ///
    /// This method:
    /// 1. Parses the textual header
    /// 2. Rejects any format version other than `P6`
    /// 3. Reads exactly `width * height * 3` payload bytes
    ///
    /// A payload shorter than the header promises is reported as
    /// [`ConversionError::CorruptPayload`], never returned as a partial
    /// image. Sizing uses checked multiplication, so dimensions whose
    /// byte count would overflow `usize` fail before any allocation.
    fn read_rgb(&self, input: &mut dyn Read) -> Result<RgbImage> {
        let header = parse_header(input)?;

        if header.version != BINARY_RGB_VERSION {
            return Err(ConversionError::UnsupportedVersion(header.version));
        }

        let expected = header
            .width
            .checked_mul(header.height)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .ok_or(ConversionError::InvalidDimensions(
                header.width,
                header.height,
            ))?;

        debug!(
            "Decoding P6 payload: {}x{}, {} bytes",
            header.width, header.height, expected
        );

        let mut data = vec![0u8; expected];
        let mut read = 0;
        while read < expected {
            match input.read(&mut data[read..])? {
                0 => return Err(ConversionError::CorruptPayload(expected, read)),
                n => read += n,
            }
        }

        Ok(RgbImage {
            width: header.width,
            height: header.height,
            max_value: header.max_value,
            data,
        })
    }
}
