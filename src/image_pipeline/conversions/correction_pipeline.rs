use tracing::{info, instrument, warn};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{CorrectionError, Result},
    conversions::timing::PipelineTimings,
    correction::{self, CorrectionMode},
    output::{CorrectionConfig, FormatWriter, ImageWriter},
    raster::{ImageCrateReader, ImageReader, RasterImage},
};

/// Decode, white balance and encode, one image per call.
///
/// The pipeline holds no per-image state; a single instance can serve any
/// number of independent conversions.
pub struct CorrectionPipeline<R: ImageReader, W: ImageWriter> {
    reader: R,
    writer: W,
    config: CorrectionConfig,
}

impl CorrectionPipeline<ImageCrateReader, FormatWriter> {
    pub fn new(config: CorrectionConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            writer: FormatWriter,
            config,
        }
    }
}

impl<R: ImageReader, W: ImageWriter> CorrectionPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: CorrectionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(CorrectionError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(
                    "Image dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(CorrectionError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Validates and corrects an already decoded image with the configured mode.
    pub fn correct_image(&self, image: &RasterImage) -> Result<RasterImage> {
        self.validate_dimensions(image.width(), image.height())?;
        correction::correct(image, &self.config.mode)
    }

    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        self.convert_with_timings(input_data, output).map(|_| ())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert_with_timings(
        &self,
        input_data: &[u8],
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!(mode = %self.config.mode, "Starting white balance correction");

        let image = timings.time("decode_image", || {
            let _span = tracing::info_span!("decode_image").entered();
            self.reader.read_image(input_data)
        })?;

        timings.merge(self.correct_and_encode(&image, output)?);
        Ok(timings)
    }

    /// Validates, corrects and encodes an already decoded image.
    pub fn correct_and_encode(
        &self,
        image: &RasterImage,
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();

        timings.time("validate_dimensions", || {
            let _span = tracing::info_span!("validate_dimensions",
                width = image.width(),
                height = image.height()
            ).entered();
            self.validate_dimensions(image.width(), image.height())
        })?;

        let corrected = timings.time("correct", || {
            let _span = tracing::info_span!("correct").entered();
            correction::correct(image, &self.config.mode)
        })?;

        timings.time("encode_output", || {
            let _span = tracing::info_span!("encode_output",
                format = ?self.config.output_format
            ).entered();
            self.writer.write_image(&corrected, output, &self.config)
        })?;

        info!(
            width = corrected.width(),
            height = corrected.height(),
            "Correction complete in {:.3}ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    /// Reads and decodes an image file. The format is detected from the
    /// file contents, not its extension.
    #[instrument(skip(self, input_path), fields(input = %input_path.as_ref().display()))]
    pub fn read_file<P: AsRef<Path>>(&self, input_path: P) -> Result<RasterImage> {
        let input_path = input_path.as_ref();
        let input_data = std::fs::read(input_path).map_err(|e| {
            CorrectionError::InputReadError(format!("{}: {}", input_path.display(), e))
        })?;

        let _span = tracing::info_span!("decode_image").entered();
        self.reader.read_image(&input_data)
    }

    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        self.convert_file_with_timings(input_path, output_path).map(|_| ())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file_with_timings<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = timings.time("read_input_file", || {
            std::fs::read(input_path).map_err(|e| {
                CorrectionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })
        })?;

        // Encode into memory first so a failed correction never leaves a
        // truncated file behind.
        let mut encoded = Vec::new();
        timings.merge(self.convert_with_timings(&input_data, &mut encoded)?);
        timings.time("write_output_file", || write_output(output_path, &encoded))?;

        Ok(timings)
    }

    /// Corrects an already decoded image and writes the encoded result to
    /// `output_path`. Nothing is written if any step fails.
    #[instrument(skip(self, image, output_path), fields(output = %output_path.as_ref().display()))]
    pub fn correct_to_file_with_timings<Q: AsRef<Path>>(
        &self,
        image: &RasterImage,
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let output_path = output_path.as_ref();

        let mut encoded = Vec::new();
        let mut timings = self.correct_and_encode(image, &mut encoded)?;
        timings.time("write_output_file", || write_output(output_path, &encoded))?;

        Ok(timings)
    }

    pub fn config(&self) -> &CorrectionConfig {
        &self.config
    }

    pub fn set_mode(&mut self, mode: CorrectionMode) {
        self.config.mode = mode;
    }
}

fn write_output(output_path: &Path, encoded: &[u8]) -> Result<()> {
    std::fs::write(output_path, encoded).map_err(|e| {
        CorrectionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
    })
}
