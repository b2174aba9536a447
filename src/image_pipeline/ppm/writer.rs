use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::filter::types::GreyImage;
use crate::image_pipeline::ppm::types::RgbImage;

pub trait PixmapWriter {
    fn write_grey(&self, image: &GreyImage, output: &mut dyn Write) -> Result<()>;
    fn write_rgb(&self, image: &RgbImage, output: &mut dyn Write) -> Result<()>;
}
