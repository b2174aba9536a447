use std::io::Read;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::ppm::types::RgbImage;

pub trait PixmapReader {
    fn read_rgb(&self, input: &mut dyn Read) -> Result<RgbImage>;
}
