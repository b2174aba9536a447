//! Filter selection and output types

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Single-channel luma image produced by the greyscale filter
#[derive(Debug, Clone)]
pub struct GreyImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Maximum channel value carried over from the source header
    pub max_value: u32,
    /// Luma data, one byte per pixel
    pub data: Vec<u8>,
}

/// Supported tone conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneMode {
    Greyscale,
    Sepia,
}

impl ToneMode {
    /// Maps the invocation parameter (`"1"` or `"2"`) to a mode.
    ///
    /// Anything else, including non-numeric input, is
    /// [`ConversionError::InvalidMode`] rather than a default.
    pub fn from_param(param: &str) -> Result<Self> {
        match param.parse::<u32>() {
            Ok(1) => Ok(ToneMode::Greyscale),
            Ok(2) => Ok(ToneMode::Sepia),
            _ => Err(ConversionError::InvalidMode(param.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConversionConfig {
    pub mode: ToneMode,
    pub validate_dimensions: bool,
    pub max_dimension: Option<usize>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            mode: ToneMode::Greyscale,
            validate_dimensions: true,
            max_dimension: Some(50000),
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct ConversionConfigBuilder {
    mode: Option<ToneMode>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl ConversionConfigBuilder {
    pub fn mode(mut self, mode: ToneMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            mode: self.mode.unwrap_or(default.mode),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
