//! Resolution of two raw axis values into a full coordinate record

use log::{debug, warn};

use super::coordinates::{AxisValue, Coordinates};
use super::dms::DmsCodec;
use super::format_parser::{CoordinateFormatParser, RawCoordinate};
use super::transform::{Axis, CoordinateTransformer};
use crate::errors::MapResult;

/// Resolves raw X/Y input into pixel, decimal and DMS form
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateResolver {
    transformer: CoordinateTransformer,
}

impl CoordinateResolver {
    /// Create a resolver using the given transformer
    pub fn new(transformer: CoordinateTransformer) -> Self {
        CoordinateResolver { transformer }
    }

    /// Transformer used for pixel/degree conversion
    pub fn transformer(&self) -> &CoordinateTransformer {
        &self.transformer
    }

    /// Resolve an X (longitude) and Y (latitude) value independently
    ///
    /// Each input may be an integer pixel, a decimal degree value or DMS
    /// text. An axis that fails to classify or decode is left unset in the
    /// result; this is not an error.
    pub fn resolve(&self, raw_x: &str, raw_y: &str) -> Coordinates {
        let mut coordinates = Coordinates::new();

        for (axis, raw) in [(Axis::X, raw_x), (Axis::Y, raw_y)] {
            match self.resolve_axis(axis, raw) {
                Ok(value) => coordinates.set_axis(axis, value),
                Err(e) => warn!("Leaving {:?} unresolved for input '{}': {}", axis, raw, e),
            }
        }

        debug!("Resolved ({}, {}) -> {:?}", raw_x, raw_y, coordinates);
        coordinates
    }

    /// Resolve a single axis into all three representations
    pub fn resolve_axis(&self, axis: Axis, raw: &str) -> MapResult<AxisValue> {
        let is_latitude = axis.is_latitude();

        let value = match CoordinateFormatParser::classify(raw)? {
            RawCoordinate::PixelInt(pixel) => {
                let decimal = self.transformer.pixel_to_decimal(axis, pixel);
                AxisValue { pixel, decimal, dms: DmsCodec::encode(decimal, is_latitude) }
            }
            RawCoordinate::DecimalFloat(decimal) => AxisValue {
                pixel: self.transformer.decimal_to_pixel(axis, decimal),
                decimal,
                dms: DmsCodec::encode(decimal, is_latitude),
            },
            RawCoordinate::DmsText(text) => {
                let decimal = DmsCodec::decode(&text)?;
                AxisValue {
                    pixel: self.transformer.decimal_to_pixel(axis, decimal),
                    decimal,
                    dms: text,
                }
            }
        };

        Ok(value)
    }
}
