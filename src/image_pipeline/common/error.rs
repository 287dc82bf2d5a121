use thiserror::Error;

use crate::image_pipeline::correction::Channel;

#[derive(Error, Debug)]
pub enum CorrectionError {
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Neutral point ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Invalid {channel} gain {gain}: gains must be finite and positive")]
    InvalidGain { channel: Channel, gain: f64 },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CorrectionError>;
