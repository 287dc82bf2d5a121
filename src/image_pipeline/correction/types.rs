//! Correction parameter types

use std::fmt;

use crate::image_pipeline::raster::{RasterImage, CHANNELS};

/// One of the three color channels, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; CHANNELS] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Sample offset of this channel within a pixel.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        })
    }
}

/// White balance strategy, selected once per correction call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CorrectionMode {
    /// Scale channels so their means become equal.
    GrayWorld,
    /// Fixed red and blue multipliers; green is left untouched.
    ManualGain { red_gain: f64, blue_gain: f64 },
    /// Regrade so the pixel at column `x`, row `y` becomes neutral gray.
    NeutralPoint { x: usize, y: usize },
}

impl Default for CorrectionMode {
    fn default() -> Self {
        CorrectionMode::ManualGain {
            red_gain: 1.0,
            blue_gain: 1.0,
        }
    }
}

impl fmt::Display for CorrectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorrectionMode::GrayWorld => f.write_str("gray world"),
            CorrectionMode::ManualGain { red_gain, blue_gain } => {
                write!(f, "manual gain (red {red_gain:.2}, blue {blue_gain:.2})")
            }
            CorrectionMode::NeutralPoint { x, y } => write!(f, "neutral point ({x}, {y})"),
        }
    }
}

/// Multiplicative gain for each channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelGains {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl ChannelGains {
    pub const IDENTITY: ChannelGains = ChannelGains {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
    };

    pub fn from_array(gains: [f64; CHANNELS]) -> Self {
        Self {
            red: gains[0],
            green: gains[1],
            blue: gains[2],
        }
    }

    pub fn to_array(self) -> [f64; CHANNELS] {
        [self.red, self.green, self.blue]
    }

    pub fn get(&self, channel: Channel) -> f64 {
        self.to_array()[channel.index()]
    }

    /// Scales every sample of `image`, producing a new raster.
    pub fn apply(&self, image: &RasterImage) -> RasterImage {
        let gains = self.to_array();
        let data = image
            .pixels()
            .flat_map(|px| {
                [
                    scale_sample(px[0], gains[0]),
                    scale_sample(px[1], gains[1]),
                    scale_sample(px[2], gains[2]),
                ]
            })
            .collect();

        image.with_samples(data)
    }
}

impl Default for ChannelGains {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `sample * gain`, rounded half away from zero and clamped to `[0, 255]`.
#[inline]
pub(crate) fn scale_sample(sample: u8, gain: f64) -> u8 {
    (f64::from(sample) * gain).round().clamp(0.0, 255.0) as u8
}
