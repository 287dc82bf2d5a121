use tracing::{debug, instrument, warn};

use crate::image_pipeline::correction::types::{Channel, ChannelGains};
use crate::image_pipeline::raster::RasterImage;

/// Gains that bring each channel mean to the mean of all three.
///
/// A channel whose mean is zero cannot be scaled toward gray; it keeps a
/// gain of 1.0. An all-black image therefore comes back unchanged.
pub fn gray_world_gains(image: &RasterImage) -> ChannelGains {
    let means = image.channel_means();
    let gray = means.iter().sum::<f64>() / means.len() as f64;

    debug!(
        mean_r = means[0],
        mean_g = means[1],
        mean_b = means[2],
        gray,
        "Gray world statistics"
    );

    let mut gains = [1.0; 3];
    for channel in Channel::ALL {
        let mean = means[channel.index()];
        if mean > 0.0 {
            gains[channel.index()] = gray / mean;
        } else {
            warn!("{} channel is fully black, leaving it unscaled", channel);
        }
    }

    ChannelGains::from_array(gains)
}

/// Gray world white balance: assumes the scene averages to neutral gray.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn gray_world_correct(image: &RasterImage) -> RasterImage {
    gray_world_gains(image).apply(image)
}
