use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::RasterImage;
use crate::image_pipeline::output::types::CorrectionConfig;

pub trait ImageWriter {
    fn write_image(&self, image: &RasterImage, output: &mut dyn Write, config: &CorrectionConfig) -> Result<()>;
}
