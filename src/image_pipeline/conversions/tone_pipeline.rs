use tracing::{info, instrument};
use std::io::{BufReader, Read, Write};
use std::path::Path;

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    filter::{to_greyscale, to_sepia, ConversionConfig, GreyImage, ToneMode},
    ppm::{BinaryPpmReader, PixmapReader, PixmapWriter, RgbImage, StandardPpmWriter},
};

/// Transformed buffer on its way to the writer.
enum TonedImage {
    Grey(GreyImage),
    Rgb(RgbImage),
}

pub struct TonePipeline<R: PixmapReader, W: PixmapWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl TonePipeline<BinaryPpmReader, StandardPpmWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: BinaryPpmReader,
            writer: StandardPpmWriter,
            config,
        }
    }
}

impl<R: PixmapReader, W: PixmapWriter> TonePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                return Err(ConversionError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    #[instrument(skip(self, input, output))]
    pub fn convert(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<()> {
        info!("Starting tone conversion");

        let rgb_image = {
            let _span = tracing::info_span!("decode_ppm").entered();
            self.reader.read_rgb(input)?
        };

        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = rgb_image.width,
                height = rgb_image.height
            )
            .entered();
            self.validate_dimensions(rgb_image.width, rgb_image.height)?;
        }

        let toned = {
            let _span = tracing::info_span!("apply_tone").entered();
            match self.config.mode {
                ToneMode::Greyscale => TonedImage::Grey(GreyImage {
                    width: rgb_image.width,
                    height: rgb_image.height,
                    max_value: rgb_image.max_value,
                    data: to_greyscale(&rgb_image.data, rgb_image.pixel_count()),
                }),
                ToneMode::Sepia => TonedImage::Rgb(RgbImage {
                    width: rgb_image.width,
                    height: rgb_image.height,
                    max_value: rgb_image.max_value,
                    data: to_sepia(&rgb_image.data, rgb_image.pixel_count()),
                }),
            }
        };

        {
            let _span = tracing::info_span!("encode_ppm").entered();
            match &toned {
                TonedImage::Grey(image) => self.writer.write_grey(image, output)?,
                TonedImage::Rgb(image) => self.writer.write_rgb(image, output)?,
            }
        }

        info!(
            width = rgb_image.width,
            height = rgb_image.height,
            mode = ?self.config.mode,
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let mut input = {
            let _span = tracing::info_span!("open_input_file").entered();
            BufReader::new(std::fs::File::open(input_path)?)
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path)?
        };

        self.convert(&mut input, &mut output_file)?;

        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
