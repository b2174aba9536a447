use std::io::Write;

use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::filter::types::GreyImage;
use crate::image_pipeline::ppm::header::{write_header, BINARY_GREY_VERSION, BINARY_RGB_VERSION};
use crate::image_pipeline::ppm::types::RgbImage;
use crate::image_pipeline::ppm::writer::PixmapWriter;

/// Stream writer emitting the `P5`/`P6` binary pixmap variants.
pub struct StandardPpmWriter;

impl PixmapWriter for StandardPpmWriter {
    fn write_grey(&self, image: &GreyImage, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding P5 image: {}x{}", image.width, image.height);

        write_header(
            output,
            BINARY_GREY_VERSION,
            image.width,
            image.height,
            image.max_value,
        )?;
        output.write_all(&image.data)?;

        Ok(())
    }

    fn write_rgb(&self, image: &RgbImage, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding P6 image: {}x{}", image.width, image.height);

        write_header(
            output,
            BINARY_RGB_VERSION,
            image.width,
            image.height,
            image.max_value,
        )?;
        output.write_all(&image.data)?;

        Ok(())
    }
}
