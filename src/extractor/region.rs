//! Rectangle and region structures for defining the crop area
//!
//! Coordinates are in pixels and follow the image convention where (0,0)
//! is the top-left corner of the raster. A `Rectangle` is built from two
//! arbitrary corners; a `Region` is the validated crop window derived
//! from it.

use crate::errors::{MapError, MapResult};

/// Region for fragment extraction (in pixel coordinates)
///
/// Represents a rectangular area defined by its top-left corner and its
/// dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> u32 {
        self.x + self.width
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u32 {
        self.y + self.height
    }
}

/// Normalized rectangle between two corner points
///
/// Always satisfies `left <= right` and `top <= bottom`. Bounds are kept
/// as `i64` so any pair of `i32` corners can be normalized without
/// overflow before being checked against the raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl Rectangle {
    /// Normalize two corners given in any order
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (x1, y1, x2, y2) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);
        Rectangle {
            left: x1.min(x2),
            top: y1.min(y2),
            right: x1.max(x2),
            bottom: y1.max(y2),
        }
    }

    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    pub fn height(&self) -> i64 {
        self.bottom - self.top
    }

    /// Whether the rectangle has no area
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Whether the rectangle lies entirely inside a `width` x `height` raster
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.right <= width as i64
            && self.bottom <= height as i64
    }

    /// Validate against the raster dimensions and convert to a crop region
    ///
    /// # Errors
    /// * `ExtractionError` if the rectangle is degenerate or leaves the raster
    pub fn to_region(&self, width: u32, height: u32) -> MapResult<Region> {
        if self.is_degenerate() {
            return Err(MapError::extraction(format!(
                "Degenerate rectangle {}x{} at ({}, {})",
                self.width(), self.height(), self.left, self.top)));
        }
        if !self.fits_within(width, height) {
            return Err(MapError::extraction(format!(
                "Rectangle ({}, {})-({}, {}) lies outside the {}x{} map",
                self.left, self.top, self.right, self.bottom, width, height)));
        }

        // Bounds are now within 0..=u32 dimensions
        Ok(Region::new(
            self.left as u32,
            self.top as u32,
            self.width() as u32,
            self.height() as u32,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_are_normalized() {
        let a = Rectangle::from_corners(100, 200, 50, 80);
        let b = Rectangle::from_corners(50, 80, 100, 200);
        assert_eq!(a, b);
        assert_eq!((a.left, a.top, a.right, a.bottom), (50, 80, 100, 200));
        assert_eq!((a.width(), a.height()), (50, 120));
    }

    #[test]
    fn test_mixed_corners_are_normalized() {
        let r = Rectangle::from_corners(10, 90, 60, 20);
        assert_eq!((r.left, r.top, r.right, r.bottom), (10, 20, 60, 90));
    }

    #[test]
    fn test_extreme_corners_do_not_overflow() {
        let r = Rectangle::from_corners(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(r.width(), u32::MAX as i64);
        assert!(!r.fits_within(1000, 1000));
    }

    #[test]
    fn test_degenerate_rectangle_is_rejected() {
        let r = Rectangle::from_corners(10, 10, 10, 50);
        assert!(r.is_degenerate());
        assert!(matches!(r.to_region(100, 100), Err(MapError::ExtractionError { .. })));
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        assert!(Rectangle::from_corners(-1, 0, 10, 10).to_region(100, 100).is_err());
        assert!(Rectangle::from_corners(0, 0, 101, 10).to_region(100, 100).is_err());
        assert!(Rectangle::from_corners(200, 200, 300, 300).to_region(100, 100).is_err());
    }

    #[test]
    fn test_full_raster_is_a_valid_region() {
        let region = Rectangle::from_corners(100, 100, 0, 0).to_region(100, 100).unwrap();
        assert_eq!(region, Region::new(0, 0, 100, 100));
        assert_eq!((region.end_x(), region.end_y()), (100, 100));
    }
}
