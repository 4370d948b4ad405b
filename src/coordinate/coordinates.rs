//! Coordinate record returned by resolution

use std::fmt;
use super::transform::Axis;

/// One axis fully resolved into its three representations
#[derive(Debug, Clone, PartialEq)]
pub struct AxisValue {
    /// Pixel offset along the axis
    pub pixel: i32,
    /// Decimal degrees
    pub decimal: f64,
    /// DMS text with hemisphere letter
    pub dms: String,
}

/// A point described in pixel, decimal and DMS form
///
/// Every populated field describes the same location. An axis whose input
/// could not be resolved keeps all three of its fields at `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coordinates {
    /// Pixel offset from the left edge
    pub pixel_x: Option<i32>,
    /// Pixel offset from the top edge
    pub pixel_y: Option<i32>,
    /// Decimal longitude
    pub longitude: Option<f64>,
    /// Decimal latitude
    pub latitude: Option<f64>,
    /// Longitude as DMS text
    pub longitude_dms: Option<String>,
    /// Latitude as DMS text
    pub latitude_dms: Option<String>,
}

impl Coordinates {
    /// Create an empty record
    pub fn new() -> Self {
        Coordinates::default()
    }

    /// Fill the three fields belonging to one axis
    pub fn set_axis(&mut self, axis: Axis, value: AxisValue) {
        match axis {
            Axis::X => {
                self.pixel_x = Some(value.pixel);
                self.longitude = Some(value.decimal);
                self.longitude_dms = Some(value.dms);
            }
            Axis::Y => {
                self.pixel_y = Some(value.pixel);
                self.latitude = Some(value.decimal);
                self.latitude_dms = Some(value.dms);
            }
        }
    }

    /// Whether the given axis was resolved
    pub fn is_axis_resolved(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.pixel_x.is_some() && self.longitude.is_some() && self.longitude_dms.is_some(),
            Axis::Y => self.pixel_y.is_some() && self.latitude.is_some() && self.latitude_dms.is_some(),
        }
    }

    /// Whether both axes were resolved
    pub fn is_complete(&self) -> bool {
        self.is_axis_resolved(Axis::X) && self.is_axis_resolved(Axis::Y)
    }
}

fn write_field<T: fmt::Display>(f: &mut fmt::Formatter<'_>, name: &str, value: &Option<T>) -> fmt::Result {
    match value {
        Some(v) => writeln!(f, "  {:<14} {}", name, v),
        None => writeln!(f, "  {:<14} unset", name),
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Coordinates:")?;
        write_field(f, "x:", &self.pixel_x)?;
        write_field(f, "y:", &self.pixel_y)?;
        write_field(f, "longitude:", &self.longitude)?;
        write_field(f, "latitude:", &self.latitude)?;
        write_field(f, "longitude DMS:", &self.longitude_dms)?;
        write_field(f, "latitude DMS:", &self.latitude_dms)
    }
}
