//! Coordinate handling for the calibrated map
//!
//! This module provides the calibration, the pixel/degree transform,
//! the DMS codec, and the two textual recognition rules used to turn
//! user input into a fully populated coordinate record.

mod calibration;
mod transform;
mod dms;
mod format_parser;
mod coordinates;
mod resolver;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::calibration::{Calibration, MapDimensions};
pub use self::transform::{Axis, CoordinateTransformer};
pub use self::dms::DmsCodec;
pub use self::format_parser::{CoordinateFormatParser, ParsedCoordinate, RawCoordinate, PIXEL_SUFFIX};
pub use self::coordinates::{AxisValue, Coordinates};
pub use self::resolver::CoordinateResolver;
