//! Fragment extraction from the map raster
//!
//! This module owns the loaded raster and the logic for cutting
//! rectangular fragments out of it.

mod region;
mod raster;
mod fragment;

// Public exports
pub use region::{Rectangle, Region};
pub use raster::RasterImage;
pub use fragment::{FragmentEncoder, ImageFragmentExtractor, PngFragmentEncoder};
