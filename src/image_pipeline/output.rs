//! Output encoding module
//!
//! This module encodes corrected rasters into lossless formats: PNG (the
//! default download format) or TIFF with various compression options.

mod writer;
mod png_writer;
mod standard_tiff_writer;
mod format_writer;
pub mod types;

pub use writer::ImageWriter;
pub use png_writer::PngWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use format_writer::FormatWriter;
pub use types::{CorrectionConfig, CorrectionConfigBuilder, OutputFormat, TiffCompression};
