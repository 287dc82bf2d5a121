use std::io::Write;
use image::{ExtendedColorType, ImageEncoder};
use image::codecs::png::PngEncoder;
use tracing::debug;
use crate::image_pipeline::common::error::{Result, CorrectionError};
use crate::image_pipeline::raster::RasterImage;
use crate::image_pipeline::output::types::CorrectionConfig;
use crate::image_pipeline::output::writer::ImageWriter;

pub struct PngWriter;

pub(crate) fn dimensions_u32(image: &RasterImage) -> Result<(u32, u32)> {
    let (width, height) = image.dimensions();
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(CorrectionError::InvalidDimensions(width, height)),
    }
}

impl ImageWriter for PngWriter {
    fn write_image(&self, image: &RasterImage, output: &mut dyn Write, _config: &CorrectionConfig) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width(), image.height());

        let (width, height) = dimensions_u32(image)?;
        let mut buffer = Vec::new();

        PngEncoder::new(&mut buffer)
            .write_image(image.data(), width, height, ExtendedColorType::Rgb8)
            .map_err(|e| CorrectionError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("PNG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
