//! Color correction module
//!
//! White balance corrections over an RGB [`RasterImage`]. Every correction
//! derives one multiplicative gain per channel and regrades the whole image
//! with it, rounding to the nearest sample and clamping to `[0, 255]`.
//! Inputs are never mutated; each call returns a new raster of the same shape.

mod types;
mod gray_world;
mod manual_gain;
mod neutral_point;


pub use types::{Channel, ChannelGains, CorrectionMode};
pub use gray_world::{gray_world_correct, gray_world_gains};
pub use manual_gain::{manual_gain_correct, manual_gains};
pub use neutral_point::{neutral_point_correct, neutral_point_gains, NEUTRAL_EPSILON};

use tracing::{debug, instrument};

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::RasterImage;

/// Per-channel gains `mode` would apply to `image`.
pub fn correction_gains(image: &RasterImage, mode: &CorrectionMode) -> Result<ChannelGains> {
    match *mode {
        CorrectionMode::GrayWorld => Ok(gray_world_gains(image)),
        CorrectionMode::ManualGain { red_gain, blue_gain } => manual_gains(red_gain, blue_gain),
        CorrectionMode::NeutralPoint { x, y } => neutral_point_gains(image, x, y),
    }
}

/// Applies the correction selected by `mode`.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn correct(image: &RasterImage, mode: &CorrectionMode) -> Result<RasterImage> {
    let gains = correction_gains(image, mode)?;
    debug!(
        red = gains.red,
        green = gains.green,
        blue = gains.blue,
        "Applying {} correction",
        mode
    );
    Ok(gains.apply(image))
}
