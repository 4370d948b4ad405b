//! Linear pixel <-> decimal degree transformation

use log::debug;
use super::calibration::Calibration;

/// Map axis being transformed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis, pixel X <-> longitude
    X,
    /// Vertical axis, pixel Y <-> latitude (north at the top)
    Y,
}

impl Axis {
    /// Whether this axis carries latitude values
    pub fn is_latitude(&self) -> bool {
        matches!(self, Axis::Y)
    }
}

/// Transformer between raster pixel offsets and decimal degrees
///
/// The mapping is a plain linear interpolation across the calibrated
/// bounding box. Values outside the box extrapolate silently.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateTransformer {
    calibration: Calibration,
}

impl Default for CoordinateTransformer {
    fn default() -> Self {
        CoordinateTransformer::new(*Calibration::global())
    }
}

impl CoordinateTransformer {
    /// Create a transformer for the given calibration
    pub fn new(calibration: Calibration) -> Self {
        CoordinateTransformer { calibration }
    }

    /// Calibration used by this transformer
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Convert a pixel offset to decimal degrees
    pub fn pixel_to_decimal(&self, axis: Axis, pixel: i32) -> f64 {
        let c = &self.calibration;
        let fraction = pixel as f64 / c.pixel_span;
        let decimal = match axis {
            Axis::X => c.left_longitude + fraction * c.longitude_extent(),
            Axis::Y => c.top_latitude - fraction * c.latitude_extent(),
        };
        debug!("Pixel {:?}={} -> {}", axis, pixel, decimal);
        decimal
    }

    /// Convert decimal degrees to a pixel offset
    ///
    /// The result is truncated toward zero, so a pixel -> decimal -> pixel
    /// round trip may land one unit short.
    pub fn decimal_to_pixel(&self, axis: Axis, decimal: f64) -> i32 {
        let c = &self.calibration;
        let fraction = match axis {
            Axis::X => (decimal - c.left_longitude) / c.longitude_extent(),
            Axis::Y => (c.top_latitude - decimal) / c.latitude_extent(),
        };
        let pixel = (fraction * c.pixel_span) as i32;
        debug!("Decimal {:?}={} -> pixel {}", axis, decimal, pixel);
        pixel
    }

    pub fn pixel_x_to_longitude(&self, x: i32) -> f64 {
        self.pixel_to_decimal(Axis::X, x)
    }

    pub fn pixel_y_to_latitude(&self, y: i32) -> f64 {
        self.pixel_to_decimal(Axis::Y, y)
    }

    pub fn longitude_to_pixel_x(&self, lon: f64) -> i32 {
        self.decimal_to_pixel(Axis::X, lon)
    }

    pub fn latitude_to_pixel_y(&self, lat: f64) -> i32 {
        self.decimal_to_pixel(Axis::Y, lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn transformer() -> CoordinateTransformer {
        CoordinateTransformer::default()
    }

    #[test]
    fn test_edges_map_to_bounding_box() {
        let t = transformer();
        let c = *t.calibration();
        assert!((t.pixel_x_to_longitude(0) - c.left_longitude).abs() < EPSILON);
        assert!((t.pixel_x_to_longitude(1000) - c.right_longitude).abs() < EPSILON);
        assert!((t.pixel_y_to_latitude(0) - c.top_latitude).abs() < EPSILON);
        assert!((t.pixel_y_to_latitude(1000) - c.bottom_latitude).abs() < EPSILON);
    }

    #[test]
    fn test_latitude_decreases_downwards() {
        let t = transformer();
        assert!(t.pixel_y_to_latitude(100) > t.pixel_y_to_latitude(900));
        assert!(t.pixel_x_to_longitude(100) < t.pixel_x_to_longitude(900));
    }

    #[test]
    fn test_pixel_round_trip_loses_at_most_one_unit() {
        let t = transformer();
        for axis in [Axis::X, Axis::Y] {
            for pixel in (0..=1000).step_by(7) {
                let back = t.decimal_to_pixel(axis, t.pixel_to_decimal(axis, pixel));
                assert!(back == pixel || back == pixel - 1,
                        "{:?}: {} came back as {}", axis, pixel, back);
            }
        }
    }

    #[test]
    fn test_decimal_round_trip_within_one_pixel_step() {
        let t = transformer();
        let c = *t.calibration();
        let lon_step = c.longitude_extent() / c.pixel_span;
        let lat_step = c.latitude_extent() / c.pixel_span;

        let lon = 18.5612;
        let lon_back = t.pixel_x_to_longitude(t.longitude_to_pixel_x(lon));
        assert!((lon - lon_back).abs() <= lon_step);

        let lat = 54.4411;
        let lat_back = t.pixel_y_to_latitude(t.latitude_to_pixel_y(lat));
        assert!((lat - lat_back).abs() <= lat_step);
    }

    #[test]
    fn test_truncates_toward_zero() {
        let t = transformer();
        let c = *t.calibration();
        let step = c.longitude_extent() / c.pixel_span;
        // Just under one pixel on either side of the left edge
        assert_eq!(t.longitude_to_pixel_x(c.left_longitude + 0.9 * step), 0);
        assert_eq!(t.longitude_to_pixel_x(c.left_longitude - 0.9 * step), 0);
    }

    #[test]
    fn test_out_of_range_extrapolates() {
        let t = transformer();
        let c = *t.calibration();
        assert!(t.pixel_x_to_longitude(2000) > c.right_longitude);
        assert!(t.pixel_y_to_latitude(-500) > c.top_latitude);
        assert!(t.latitude_to_pixel_y(c.bottom_latitude - c.latitude_extent()) >= 1999);
    }
}
