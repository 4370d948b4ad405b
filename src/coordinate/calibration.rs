//! Map calibration constants
//!
//! The linear calibration between pixel space and decimal degrees is
//! compiled into the binary from `calibration.toml` and parsed once.

use lazy_static::lazy_static;
use crate::errors::{MapError, MapResult};

lazy_static! {
    // Parse the embedded calibration at startup
    static ref CALIBRATION: Calibration = {
        let content = include_str!("../../calibration.toml");
        Calibration::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse map calibration: {}", e);
            Calibration::default()
        })
    };
}

/// Physical extent of the mapped area in meters
///
/// Kept as metadata only; no pixel transform reads these values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapDimensions {
    pub width_m: f64,
    pub height_m: f64,
    pub diagonal_m: f64,
}

/// Bounding box corners of the map plus the pixel span per axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    /// Latitude of the top edge (north)
    pub top_latitude: f64,
    /// Latitude of the bottom edge (south)
    pub bottom_latitude: f64,
    /// Longitude of the left edge (west)
    pub left_longitude: f64,
    /// Longitude of the right edge (east)
    pub right_longitude: f64,
    /// Number of pixel units covering each axis
    pub pixel_span: f64,
    /// Meter-based extent, unused by the transforms
    pub dimensions: Option<MapDimensions>,
}

impl Default for Calibration {
    fn default() -> Self {
        Calibration {
            top_latitude: 54.457306,
            bottom_latitude: 54.434033,
            left_longitude: 18.548444,
            right_longitude: 18.588344,
            pixel_span: 1000.0,
            dimensions: Some(MapDimensions {
                width_m: 2597.0,
                height_m: 2587.0,
                diagonal_m: 3665.0,
            }),
        }
    }
}

impl Calibration {
    /// The process-wide calibration embedded at build time
    pub fn global() -> &'static Calibration {
        &CALIBRATION
    }

    /// Build and validate a calibration from explicit values
    pub fn new(top_latitude: f64,
               bottom_latitude: f64,
               left_longitude: f64,
               right_longitude: f64,
               pixel_span: f64) -> MapResult<Self> {
        let calibration = Calibration {
            top_latitude,
            bottom_latitude,
            left_longitude,
            right_longitude,
            pixel_span,
            dimensions: None,
        };
        calibration.validate()?;
        Ok(calibration)
    }

    /// Parse a calibration from a TOML string
    pub fn from_str(content: &str) -> MapResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(MapError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let bounds = toml_value.get("bounds")
            .and_then(|v| v.as_table())
            .ok_or_else(|| MapError::ConfigError("Missing [bounds] table".to_string()))?;

        let read_bound = |key: &str| -> MapResult<f64> {
            bounds.get(key)
                .and_then(number_value)
                .ok_or_else(|| MapError::ConfigError(format!("Missing or non-numeric bounds.{}", key)))
        };

        let pixel_span = toml_value.get("pixels")
            .and_then(|v| v.get("span"))
            .and_then(number_value)
            .ok_or_else(|| MapError::ConfigError("Missing or non-numeric pixels.span".to_string()))?;

        let dimensions = toml_value.get("dimensions").and_then(|d| {
            Some(MapDimensions {
                width_m: d.get("width_m").and_then(number_value)?,
                height_m: d.get("height_m").and_then(number_value)?,
                diagonal_m: d.get("diagonal_m").and_then(number_value)?,
            })
        });

        let calibration = Calibration {
            top_latitude: read_bound("top_latitude")?,
            bottom_latitude: read_bound("bottom_latitude")?,
            left_longitude: read_bound("left_longitude")?,
            right_longitude: read_bound("right_longitude")?,
            pixel_span,
            dimensions,
        };
        calibration.validate()?;
        Ok(calibration)
    }

    fn validate(&self) -> MapResult<()> {
        if !(self.top_latitude > self.bottom_latitude) {
            return Err(MapError::ConfigError(format!(
                "Top latitude {} must be north of bottom latitude {}",
                self.top_latitude, self.bottom_latitude)));
        }
        if !(self.right_longitude > self.left_longitude) {
            return Err(MapError::ConfigError(format!(
                "Right longitude {} must be east of left longitude {}",
                self.right_longitude, self.left_longitude)));
        }
        if !(self.pixel_span > 0.0) {
            return Err(MapError::ConfigError(format!(
                "Pixel span must be positive, got {}", self.pixel_span)));
        }
        Ok(())
    }

    /// Longitude covered by the map
    pub fn longitude_extent(&self) -> f64 {
        self.right_longitude - self.left_longitude
    }

    /// Latitude covered by the map
    pub fn latitude_extent(&self) -> f64 {
        self.top_latitude - self.bottom_latitude
    }
}

// TOML integers and floats are both accepted
fn number_value(value: &toml::Value) -> Option<f64> {
    value.as_float().or_else(|| value.as_integer().map(|i| i as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_calibration_matches_defaults() {
        assert_eq!(*Calibration::global(), Calibration::default());
    }

    #[test]
    fn test_rejects_inverted_latitudes() {
        let result = Calibration::new(54.40, 54.45, 18.5, 18.6, 1000.0);
        assert!(matches!(result, Err(MapError::ConfigError(_))));
    }

    #[test]
    fn test_rejects_zero_span() {
        let result = Calibration::new(54.45, 54.40, 18.5, 18.6, 0.0);
        assert!(matches!(result, Err(MapError::ConfigError(_))));
    }

    #[test]
    fn test_dimensions_are_optional() {
        let doc = "[bounds]\ntop_latitude = 2.0\nbottom_latitude = 1\n\
                   left_longitude = 3\nright_longitude = 4.5\n[pixels]\nspan = 500\n";
        let calibration = Calibration::from_str(doc).unwrap();
        assert_eq!(calibration.pixel_span, 500.0);
        assert_eq!(calibration.bottom_latitude, 1.0);
        assert!(calibration.dimensions.is_none());
    }

    #[test]
    fn test_missing_bounds_is_config_error() {
        let result = Calibration::from_str("[pixels]\nspan = 1000\n");
        assert!(matches!(result, Err(MapError::ConfigError(_))));
    }
}
