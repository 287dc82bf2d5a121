//! Image processing pipeline module
//!
//! This module provides white balance correction for RGB photographs, with
//! separate modules for decoding, the color corrections themselves, output
//! encoding, and conversion orchestration.

pub mod raster;
pub mod correction;
pub mod output;
pub mod conversions;
pub mod common;

pub use common::{
    CorrectionError,
    Result,
};

pub use raster::{
    RasterImage,
    ImageReader,
    ImageCrateReader,
};

pub use correction::{
    Channel,
    ChannelGains,
    CorrectionMode,
    correct,
    gray_world_correct,
    manual_gain_correct,
    neutral_point_correct,
};

pub use output::{
    OutputFormat,
    TiffCompression,
    CorrectionConfig,
    CorrectionConfigBuilder,
    ImageWriter,
    FormatWriter,
    PngWriter,
    StandardTiffWriter,
};

pub use conversions::{
    CorrectionPipeline,
    PipelineTimings,
};
