pub mod errors;
pub mod utils;
pub mod coordinate;
pub mod extractor;
pub mod commands;
pub mod api;

pub use crate::api::SopotMap;

pub use errors::{MapError, MapResult};
pub use extractor::{ImageFragmentExtractor, RasterImage, Rectangle, Region};
pub use coordinate::{
    Axis, Calibration, CoordinateFormatParser, CoordinateResolver, CoordinateTransformer,
    Coordinates, DmsCodec, ParsedCoordinate, RawCoordinate,
};
