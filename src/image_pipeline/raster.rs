//! Raster image module
//!
//! This module provides the in-memory RGB raster the corrections operate on,
//! and the reader seam that decodes encoded files into it.

mod reader;
mod image_crate_reader;
pub mod types;

pub use reader::ImageReader;
pub use image_crate_reader::ImageCrateReader;
pub use types::{RasterImage, CHANNELS};
