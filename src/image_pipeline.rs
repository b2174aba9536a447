//! Image processing pipeline module
//!
//! This module provides a structured approach to pixmap tone conversions,
//! with separate modules for PPM reading/writing, per-pixel filters, and
//! conversion orchestration.

pub mod ppm;
pub mod filter;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use ppm::{
    PpmHeader,
    RgbImage,
    PixmapReader,
    BinaryPpmReader,
    PixmapWriter,
    StandardPpmWriter,
};

pub use filter::{
    ToneMode,
    ConversionConfig,
    ConversionConfigBuilder,
    GreyImage,
};

pub use conversions::{
    TonePipeline,
};
