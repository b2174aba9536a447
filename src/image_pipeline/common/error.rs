use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Invalid conversion mode: {0}")]
    InvalidMode(String),

    #[error("Failed to parse pixmap header: {0}")]
    HeaderParse(String),

    #[error("Unsupported pixmap version: expected P6, got P{0}")]
    UnsupportedVersion(u32),

    #[error("Corrupt pixel data: expected {0} bytes, read {1}")]
    CorruptPayload(usize, usize),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
