use tracing::instrument;

use crate::image_pipeline::common::error::{CorrectionError, Result};
use crate::image_pipeline::correction::types::{Channel, ChannelGains};
use crate::image_pipeline::raster::RasterImage;

fn validate_gain(channel: Channel, gain: f64) -> Result<f64> {
    if gain.is_finite() && gain > 0.0 {
        Ok(gain)
    } else {
        Err(CorrectionError::InvalidGain { channel, gain })
    }
}

/// Gains for a manual red/blue adjustment. Any finite positive gain is
/// accepted; zero, negative and non-finite gains are rejected.
pub fn manual_gains(red_gain: f64, blue_gain: f64) -> Result<ChannelGains> {
    Ok(ChannelGains {
        red: validate_gain(Channel::Red, red_gain)?,
        green: 1.0,
        blue: validate_gain(Channel::Blue, blue_gain)?,
    })
}

/// Multiplies red by `red_gain` and blue by `blue_gain`; green is unchanged.
/// Gains of 1.0 return an exact copy of the input.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn manual_gain_correct(image: &RasterImage, red_gain: f64, blue_gain: f64) -> Result<RasterImage> {
    Ok(manual_gains(red_gain, blue_gain)?.apply(image))
}
