//! PPM header parsing and emission.
//!
//! The accepted header is the fixed minimal form
//! `P<version> <width> <height> <max_value>\n`: four tokens, each
//! terminated by a single whitespace byte. Tokens are scanned
//! byte-at-a-time so parsing consumes exactly the header text and the
//! next read from the same stream starts on the first pixel byte.

use std::io::{Read, Write};

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::ppm::types::PpmHeader;

/// Format version of the binary RGB pixmap variant (`P6`).
pub const BINARY_RGB_VERSION: u32 = 6;

/// Format version of the binary single-channel variant (`P5`).
pub const BINARY_GREY_VERSION: u32 = 5;

/// Reads one token, consuming the single whitespace byte that ends it.
fn read_token(input: &mut dyn Read) -> Result<String> {
    let mut token = Vec::new();
    let mut byte = [0u8; 1];

    loop {
        if input.read(&mut byte)? == 0 {
            return Err(ConversionError::HeaderParse(
                "unexpected end of stream".to_string(),
            ));
        }
        if byte[0].is_ascii_whitespace() {
            break;
        }
        token.push(byte[0]);
    }

    if token.is_empty() {
        return Err(ConversionError::HeaderParse(
            "empty header field".to_string(),
        ));
    }

    String::from_utf8(token)
        .map_err(|_| ConversionError::HeaderParse("non-ASCII header field".to_string()))
}

fn parse_version(token: &str) -> Result<u32> {
    token
        .strip_prefix('P')
        .and_then(|digits| digits.parse::<u32>().ok())
        .ok_or_else(|| ConversionError::HeaderParse(format!("bad magic tag: {}", token)))
}

fn parse_field(name: &str, token: &str) -> Result<u32> {
    token
        .parse::<u32>()
        .map_err(|_| ConversionError::HeaderParse(format!("bad {} field: {}", name, token)))
}

/// Reads a pixmap header from the stream.
///
/// The format version is carried through unchecked; deciding which
/// versions are acceptable is the caller's concern.
pub fn parse_header(input: &mut dyn Read) -> Result<PpmHeader> {
    let version = parse_version(&read_token(input)?)?;
    let width = parse_field("width", &read_token(input)?)? as usize;
    let height = parse_field("height", &read_token(input)?)? as usize;
    let max_value = parse_field("max value", &read_token(input)?)?;

    debug!(
        "Parsed header: P{} {}x{} max {}",
        version, width, height, max_value
    );

    Ok(PpmHeader {
        version,
        width,
        height,
        max_value,
    })
}

/// Writes a header line in the `P<version> <width> <height> <max_value>` form.
pub fn write_header(
    output: &mut dyn Write,
    version: u32,
    width: usize,
    height: usize,
    max_value: u32,
) -> Result<()> {
    writeln!(output, "P{} {} {} {}", version, width, height, max_value)?;
    Ok(())
}
