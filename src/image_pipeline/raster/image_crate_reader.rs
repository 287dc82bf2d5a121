//! Image reader implementation using the image library.
//!
//! Handles JPEG and PNG uploads (and TIFF, which the crate is built with).
//! Whatever the source color type or bit depth, the decoded picture is
//! flattened to 8-bit RGB: alpha is dropped and 16-bit samples are scaled down.

use tracing::debug;
use crate::image_pipeline::common::error::{Result, CorrectionError};
use crate::image_pipeline::raster::types::RasterImage;
use crate::image_pipeline::raster::reader::ImageReader;

/// Reader backed by `image::load_from_memory`, with format sniffing.
pub struct ImageCrateReader;

impl ImageReader for ImageCrateReader {
    /// Decodes an encoded image into an RGB8 [`RasterImage`].
    ///
    /// # Errors
    ///
    /// * `CorrectionError::DecodeError` if the bytes are not a supported image
    /// * `CorrectionError::InvalidImage` if the decoded image has no pixels
    fn read_image(&self, data: &[u8]) -> Result<RasterImage> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| CorrectionError::DecodeError(e.to_string()))?;

        debug!(
            "Decoded image: {}x{} ({:?})",
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();

        RasterImage::new(width as usize, height as usize, rgb.into_raw())
    }
}
