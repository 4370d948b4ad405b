//! Map fragment extraction
//!
//! Crops a rectangle out of the shared raster, encodes it as a lossless
//! bitmap and returns the bytes as base64 text.

use std::io::Cursor;
use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{imageops, ImageFormat, RgbaImage};
use log::{debug, info};

use super::raster::RasterImage;
use super::region::{Rectangle, Region};
use crate::errors::{MapError, MapResult};

/// Encoder turning a cropped fragment into bitmap bytes
pub trait FragmentEncoder: Send + Sync {
    /// Encode the fragment
    fn encode(&self, fragment: &RgbaImage) -> MapResult<Vec<u8>>;

    /// Name of the produced format, for logging
    fn format_name(&self) -> &'static str;
}

/// Lossless PNG encoder
#[derive(Debug, Clone, Copy, Default)]
pub struct PngFragmentEncoder;

impl FragmentEncoder for PngFragmentEncoder {
    fn encode(&self, fragment: &RgbaImage) -> MapResult<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        fragment.write_to(&mut buffer, ImageFormat::Png)?;
        Ok(buffer.into_inner())
    }

    fn format_name(&self) -> &'static str {
        "png"
    }
}

/// Extracts base64-encoded bitmap fragments from the map raster
pub struct ImageFragmentExtractor {
    raster: Arc<RasterImage>,
    encoder: Box<dyn FragmentEncoder>,
}

impl ImageFragmentExtractor {
    /// Create an extractor producing PNG fragments
    pub fn new(raster: Arc<RasterImage>) -> Self {
        ImageFragmentExtractor::with_encoder(raster, Box::new(PngFragmentEncoder))
    }

    /// Create an extractor with a custom bitmap encoder
    pub fn with_encoder(raster: Arc<RasterImage>, encoder: Box<dyn FragmentEncoder>) -> Self {
        ImageFragmentExtractor { raster, encoder }
    }

    /// Raster this extractor reads from
    pub fn raster(&self) -> &Arc<RasterImage> {
        &self.raster
    }

    /// Extract the rectangle spanned by two corners, in any order
    ///
    /// # Returns
    /// The encoded bitmap as standard base64 text
    ///
    /// # Errors
    /// * `ExtractionError` if the rectangle is empty, leaves the raster,
    ///   or cannot be encoded
    pub fn extract(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> MapResult<String> {
        let rectangle = Rectangle::from_corners(x1, y1, x2, y2);
        debug!("Normalized ({}, {}), ({}, {}) to {:?}", x1, y1, x2, y2, rectangle);

        let fragment = self.cut_fragment(&rectangle)?;
        let bytes = self.encoder.encode(&fragment)
            .map_err(|e| MapError::extraction_caused_by(
                format!("{} encoding failed", self.encoder.format_name()), e))?;

        info!("Extracted {}x{} fragment at ({}, {}) as {} bytes of {}",
              fragment.width(), fragment.height(), rectangle.left, rectangle.top,
              bytes.len(), self.encoder.format_name());

        Ok(STANDARD.encode(&bytes))
    }

    /// Copy the pixels covered by the rectangle out of the raster
    pub fn cut_fragment(&self, rectangle: &Rectangle) -> MapResult<RgbaImage> {
        let region: Region = rectangle.to_region(self.raster.width(), self.raster.height())?;
        let view = imageops::crop_imm(self.raster.pixels(), region.x, region.y, region.width, region.height);
        Ok(view.to_image())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use base64::Engine as _;
    use image::{DynamicImage, GenericImageView, Rgba};

    fn gradient_raster(width: u32, height: u32) -> Arc<RasterImage> {
        let pixels = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
        });
        Arc::new(RasterImage::from(pixels))
    }

    fn decode(base64_text: &str) -> DynamicImage {
        let bytes = STANDARD.decode(base64_text).unwrap();
        image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap()
    }

    struct FailingEncoder;

    impl FragmentEncoder for FailingEncoder {
        fn encode(&self, _fragment: &RgbaImage) -> MapResult<Vec<u8>> {
            Err(MapError::IoError(std::io::Error::new(std::io::ErrorKind::Other, "sink closed")))
        }

        fn format_name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_reversed_corners_give_identical_output() {
        let extractor = ImageFragmentExtractor::new(gradient_raster(200, 300));
        let a = extractor.extract(100, 200, 50, 80).unwrap();
        let b = extractor.extract(50, 80, 100, 200).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fragment_has_expected_pixels() {
        let extractor = ImageFragmentExtractor::new(gradient_raster(200, 300));
        let image = decode(&extractor.extract(100, 200, 50, 80).unwrap());
        assert_eq!(image.dimensions(), (50, 120));
        assert_eq!(image.get_pixel(0, 0), Rgba([50, 80, 130, 255]));
        assert_eq!(image.get_pixel(49, 119), Rgba([99, 199, 42, 255]));
    }

    #[test]
    fn test_outside_raster_is_extraction_error() {
        let extractor = ImageFragmentExtractor::new(gradient_raster(200, 300));
        let result = extractor.extract(500, 500, 600, 600);
        assert!(matches!(result, Err(MapError::ExtractionError { .. })));
    }

    #[test]
    fn test_degenerate_is_extraction_error() {
        let extractor = ImageFragmentExtractor::new(gradient_raster(200, 300));
        assert!(matches!(extractor.extract(10, 10, 10, 10), Err(MapError::ExtractionError { .. })));
        assert!(matches!(extractor.extract(10, 10, 20, 10), Err(MapError::ExtractionError { .. })));
    }

    #[test]
    fn test_encoding_failure_wraps_cause() {
        let extractor = ImageFragmentExtractor::with_encoder(gradient_raster(20, 20), Box::new(FailingEncoder));
        let err = extractor.extract(0, 0, 10, 10).unwrap_err();
        assert!(matches!(err, MapError::ExtractionError { .. }));
        let cause = err.source().unwrap();
        assert!(cause.to_string().contains("sink closed"));
    }

    #[test]
    fn test_raster_is_left_untouched() {
        let raster = gradient_raster(64, 64);
        let before = raster.pixels().clone();
        let extractor = ImageFragmentExtractor::new(Arc::clone(&raster));
        let mut fragment = extractor.cut_fragment(&Rectangle::from_corners(0, 0, 32, 32)).unwrap();
        fragment.put_pixel(0, 0, Rgba([1, 2, 3, 4]));
        assert_eq!(raster.pixels(), &before);
    }
}
