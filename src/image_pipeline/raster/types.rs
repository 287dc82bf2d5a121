//! RGB raster types

use crate::image_pipeline::common::error::{CorrectionError, Result};

/// Number of interleaved samples per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// Decoded 8-bit RGB image of shape (height, width, 3).
///
/// Samples are stored row-major and interleaved `[R, G, B, R, G, B, ...]`,
/// so the pixel at column `x`, row `y` starts at `(y * width + x) * 3`.
/// A `RasterImage` always holds at least one pixel and exactly
/// `width * height * 3` samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RasterImage {
    /// Wraps an interleaved RGB buffer, checking it against the dimensions.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CorrectionError::InvalidImage(format!(
                "raster must be at least 1x1, got {}x{}",
                width, height
            )));
        }

        let expected = sample_count(width, height)?;

        if data.len() != expected {
            return Err(CorrectionError::InvalidImage(format!(
                "expected {} samples for a {}x{} RGB raster, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }

        Ok(Self { width, height, data })
    }

    /// New raster with this raster's shape and the given samples.
    pub(crate) fn with_samples(&self, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), self.data.len());
        Self {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Builds a raster from row-major pixels.
    pub fn from_pixels(width: usize, height: usize, pixels: &[[u8; CHANNELS]]) -> Result<Self> {
        Self::new(width, height, pixels.iter().flatten().copied().collect())
    }

    /// Builds a raster where every pixel has the same value.
    pub fn filled(width: usize, height: usize, pixel: [u8; CHANNELS]) -> Result<Self> {
        let samples = sample_count(width, height)?;

        let mut data = Vec::new();
        data.try_reserve_exact(samples).map_err(|e| {
            CorrectionError::InvalidImage(format!("{}x{} raster: {}", width, height, e))
        })?;
        for _ in 0..samples / CHANNELS {
            data.extend_from_slice(&pixel);
        }

        Self::new(width, height, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Interleaved RGB samples.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at column `x`, row `y`, or `None` outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; CHANNELS]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.width + x) * CHANNELS;
        Some([self.data[offset], self.data[offset + 1], self.data[offset + 2]])
    }

    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(CHANNELS)
    }

    /// Mean intensity of each channel over all pixels, as `[R, G, B]`.
    pub fn channel_means(&self) -> [f64; CHANNELS] {
        let sums = self.pixels().fold([0u64; CHANNELS], |mut acc, px| {
            acc[0] += u64::from(px[0]);
            acc[1] += u64::from(px[1]);
            acc[2] += u64::from(px[2]);
            acc
        });

        let count = self.pixel_count() as f64;
        sums.map(|sum| sum as f64 / count)
    }
}

/// `width * height * CHANNELS`, or `InvalidImage` when it overflows.
fn sample_count(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| {
            CorrectionError::InvalidImage(format!("{}x{} raster is too large", width, height))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_raster() {
        let result = RasterImage::new(0, 4, Vec::new());
        assert!(matches!(result, Err(CorrectionError::InvalidImage(_))));

        let result = RasterImage::new(4, 0, Vec::new());
        assert!(matches!(result, Err(CorrectionError::InvalidImage(_))));
    }

    #[test]
    fn test_rejects_wrong_sample_count() {
        // Four samples per pixel, as an RGBA buffer would have.
        let result = RasterImage::new(2, 1, vec![0u8; 8]);
        assert!(matches!(result, Err(CorrectionError::InvalidImage(_))));
    }

    #[test]
    fn test_pixel_addressing_is_row_major() {
        let image = RasterImage::from_pixels(
            2,
            2,
            &[[1, 2, 3], [4, 5, 6], [7, 8, 9], [10, 11, 12]],
        )
        .unwrap();

        assert_eq!(image.pixel(1, 0), Some([4, 5, 6]));
        assert_eq!(image.pixel(0, 1), Some([7, 8, 9]));
        assert_eq!(image.pixel(2, 0), None);
        assert_eq!(image.pixel(0, 2), None);
    }

    #[test]
    fn test_channel_means() {
        let image = RasterImage::from_pixels(2, 1, &[[10, 20, 30], [30, 40, 50]]).unwrap();
        assert_eq!(image.channel_means(), [20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_filled() {
        let image = RasterImage::filled(3, 2, [9, 8, 7]).unwrap();
        assert_eq!(image.dimensions(), (3, 2));
        assert!(image.pixels().all(|px| px == [9, 8, 7]));
    }

    #[test]
    fn test_filled_rejects_overflowing_dimensions() {
        let result = RasterImage::filled(usize::MAX, 2, [1, 2, 3]);
        assert!(matches!(result, Err(CorrectionError::InvalidImage(_))));

        // Fits in usize but can never be allocated.
        let result = RasterImage::filled(isize::MAX as usize / CHANNELS, 1, [1, 2, 3]);
        assert!(matches!(result, Err(CorrectionError::InvalidImage(_))));

        let result = RasterImage::filled(0, 2, [1, 2, 3]);
        assert!(matches!(result, Err(CorrectionError::InvalidImage(_))));
    }
}
