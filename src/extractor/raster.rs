//! The backing map raster
//!
//! The raster is decoded once at startup and never mutated. Share it
//! behind an `Arc` to serve concurrent extractions without locking.

use std::path::Path;
use image::{DynamicImage, RgbaImage};
use log::info;

use crate::errors::MapResult;

/// Immutable, fully decoded map raster
#[derive(Debug, Clone)]
pub struct RasterImage {
    pixels: RgbaImage,
}

impl RasterImage {
    /// Decode a raster from disk
    ///
    /// Any format the `image` crate can read is accepted.
    pub fn open<P: AsRef<Path>>(path: P) -> MapResult<Self> {
        let path = path.as_ref();
        info!("Loading map raster from {}", path.display());
        let image = image::open(path)?;
        let raster = RasterImage::from_image(image);
        info!("Loaded {}x{} map raster", raster.width(), raster.height());
        Ok(raster)
    }

    /// Wrap an already decoded image
    pub fn from_image(image: DynamicImage) -> Self {
        RasterImage { pixels: image.to_rgba8() }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Read-only access to the pixel buffer
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl From<RgbaImage> for RasterImage {
    fn from(pixels: RgbaImage) -> Self {
        RasterImage { pixels }
    }
}
