//! Per-pixel tone filter module
//!
//! This module contains the pure pixel transforms and the conversion
//! configuration that selects between them.

pub mod greyscale;
pub mod sepia;
pub mod types;

pub use greyscale::to_greyscale;
pub use sepia::to_sepia;
pub use types::{ConversionConfig, ConversionConfigBuilder, GreyImage, ToneMode};
