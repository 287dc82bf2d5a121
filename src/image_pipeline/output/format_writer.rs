use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::RasterImage;
use crate::image_pipeline::output::png_writer::PngWriter;
use crate::image_pipeline::output::standard_tiff_writer::StandardTiffWriter;
use crate::image_pipeline::output::types::{CorrectionConfig, OutputFormat};
use crate::image_pipeline::output::writer::ImageWriter;

/// Picks the encoder from `CorrectionConfig::output_format` on every write.
pub struct FormatWriter;

impl ImageWriter for FormatWriter {
    fn write_image(&self, image: &RasterImage, output: &mut dyn Write, config: &CorrectionConfig) -> Result<()> {
        match config.output_format {
            OutputFormat::Png => PngWriter.write_image(image, output, config),
            OutputFormat::Tiff => StandardTiffWriter.write_image(image, output, config),
        }
    }
}
