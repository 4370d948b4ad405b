use std::path::Path;
use std::sync::Arc;
use log::info;

use crate::coordinate::{Calibration, CoordinateFormatParser, CoordinateResolver, CoordinateTransformer, Coordinates, ParsedCoordinate};
use crate::errors::MapResult;
use crate::extractor::{ImageFragmentExtractor, RasterImage};

/// Main interface to the map library
///
/// Bundles the coordinate resolver and the fragment extractor over one
/// shared, read-only raster. The type holds no mutable state and can be
/// shared between threads as is.
pub struct SopotMap {
    resolver: CoordinateResolver,
    extractor: ImageFragmentExtractor,
}

impl SopotMap {
    /// Create a map over an already loaded raster using the embedded calibration
    pub fn new(raster: Arc<RasterImage>) -> Self {
        SopotMap::with_calibration(raster, *Calibration::global())
    }

    /// Create a map with an explicit calibration
    pub fn with_calibration(raster: Arc<RasterImage>, calibration: Calibration) -> Self {
        SopotMap {
            resolver: CoordinateResolver::new(CoordinateTransformer::new(calibration)),
            extractor: ImageFragmentExtractor::new(raster),
        }
    }

    /// Load the raster from disk and create a map over it
    ///
    /// # Arguments
    /// * `path` - Path to the map image
    ///
    /// # Returns
    /// A SopotMap instance or an error if the raster cannot be decoded
    pub fn open<P: AsRef<Path>>(path: P) -> MapResult<Self> {
        let raster = RasterImage::open(path)?;
        Ok(SopotMap::new(Arc::new(raster)))
    }

    /// Resolve raw X and Y values into a full coordinate record
    ///
    /// Each value may be a pixel (`500`, `500px`), decimal degrees
    /// (`54.45`) or DMS text (`54°27'26.5" N`). Axes that cannot be
    /// resolved stay unset.
    pub fn coordinates(&self, raw_x: &str, raw_y: &str) -> Coordinates {
        info!("Resolving coordinates x='{}', y='{}'", raw_x, raw_y);
        self.resolver.resolve(raw_x, raw_y)
    }

    /// Parse one free-form coordinate value
    pub fn parse_coordinate(&self, raw: &str) -> MapResult<ParsedCoordinate> {
        CoordinateFormatParser::parse(raw)
    }

    /// Cut a fragment between two corners and return it as base64 PNG
    pub fn map_fragment(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> MapResult<String> {
        info!("Cutting map fragment ({}, {}) - ({}, {})", x1, y1, x2, y2);
        self.extractor.extract(x1, y1, x2, y2)
    }

    /// Calibration used to convert between pixels and degrees
    pub fn calibration(&self) -> &Calibration {
        self.resolver.transformer().calibration()
    }

    /// The resolver backing [`SopotMap::coordinates`]
    pub fn resolver(&self) -> &CoordinateResolver {
        &self.resolver
    }

    /// The raster fragments are cut from
    pub fn raster(&self) -> &RasterImage {
        self.extractor.raster()
    }
}
