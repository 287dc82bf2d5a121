use tracing::{debug, instrument};

use crate::image_pipeline::common::error::{CorrectionError, Result};
use crate::image_pipeline::correction::types::ChannelGains;
use crate::image_pipeline::raster::RasterImage;

/// Added to each reference sample so a zero channel never divides by zero.
pub const NEUTRAL_EPSILON: f64 = 1e-6;

/// Gains that turn the pixel at (`x`, `y`) into gray of the same mean level.
pub fn neutral_point_gains(image: &RasterImage, x: usize, y: usize) -> Result<ChannelGains> {
    let reference = image.pixel(x, y).ok_or(CorrectionError::OutOfBounds {
        x,
        y,
        width: image.width(),
        height: image.height(),
    })?;

    let samples = reference.map(f64::from);
    let target = samples.iter().sum::<f64>() / samples.len() as f64;

    debug!(
        r = reference[0],
        g = reference[1],
        b = reference[2],
        target,
        "Neutral reference pixel"
    );

    Ok(ChannelGains::from_array(
        samples.map(|sample| target / (sample + NEUTRAL_EPSILON)),
    ))
}

/// Regrades the whole image so the reference pixel at column `x`, row `y`
/// renders as neutral gray.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn neutral_point_correct(image: &RasterImage, x: usize, y: usize) -> Result<RasterImage> {
    Ok(neutral_point_gains(image, x, y)?.apply(image))
}
