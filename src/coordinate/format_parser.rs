//! Coordinate text recognition
//!
//! Two independent rules live here and are deliberately kept apart:
//!
//! * [`CoordinateFormatParser::parse`] reads a single free-form value:
//!   `500px` is a pixel, anything with a degree sign is DMS, and anything
//!   else must be a plain number of degrees.
//! * [`CoordinateFormatParser::classify`] sorts one axis of a coordinate
//!   request purely by its literal shape: an integer is a pixel, a number
//!   with a decimal point is degrees, and everything else is DMS text.
//!
//! The rules disagree on purpose. A bare `500` is 500 degrees to `parse`
//! but pixel 500 to `classify`.

use std::fmt;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::dms::DmsCodec;
use crate::errors::{MapError, MapResult};

/// Suffix marking a pixel value in free-form input
pub const PIXEL_SUFFIX: &str = "px";

lazy_static! {
    // Optional minus, ASCII digits, optional pixel suffix
    static ref PIXEL_SHAPE: Regex = Regex::new(r"^(-?[0-9]+)(?:px)?$").unwrap();
    // Optional minus, digits, a literal point, digits
    static ref DECIMAL_SHAPE: Regex = Regex::new(r"^-?[0-9]+\.[0-9]+$").unwrap();
}

/// Result of the free-form [`CoordinateFormatParser::parse`] rule
///
/// Pixel and degree results are different units and are never mixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedCoordinate {
    /// A raw pixel offset; the caller decides which axis it belongs to
    Pixel(i32),
    /// Decimal degrees
    Degrees(f64),
}

impl fmt::Display for ParsedCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedCoordinate::Pixel(p) => write!(f, "{}{}", p, PIXEL_SUFFIX),
            ParsedCoordinate::Degrees(d) => write!(f, "{}°", d),
        }
    }
}

/// Result of the shape-based [`CoordinateFormatParser::classify`] rule
#[derive(Debug, Clone, PartialEq)]
pub enum RawCoordinate {
    /// Integer-shaped value, taken as a pixel offset
    PixelInt(i32),
    /// Value with a decimal point, taken as decimal degrees
    DecimalFloat(f64),
    /// Anything else, kept verbatim as DMS text
    DmsText(String),
}

/// Recognizes the textual notations a coordinate may arrive in
pub struct CoordinateFormatParser;

impl CoordinateFormatParser {
    /// Parse a single free-form coordinate value
    ///
    /// Recognition order, first match wins:
    /// 1. ends with `px`: the rest is an integer pixel offset
    /// 2. contains `°`: decoded as DMS
    /// 3. a plain real number of decimal degrees
    ///
    /// # Errors
    /// * `FormatError` on blank input or an unsupported notation
    /// * `NumberFormatError` when the pixel or DMS numbers are malformed
    pub fn parse(raw: &str) -> MapResult<ParsedCoordinate> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(MapError::FormatError("Empty coordinate".to_string()));
        }

        if let Some(number) = raw.strip_suffix(PIXEL_SUFFIX) {
            let pixel = number.parse::<i32>().map_err(|e| MapError::bad_int(number, e))?;
            debug!("Parsed '{}' as pixel {}", raw, pixel);
            return Ok(ParsedCoordinate::Pixel(pixel));
        }

        if raw.contains('°') {
            return DmsCodec::decode(raw).map(ParsedCoordinate::Degrees);
        }

        match raw.parse::<f64>() {
            Ok(degrees) => {
                debug!("Parsed '{}' as {} degrees", raw, degrees);
                Ok(ParsedCoordinate::Degrees(degrees))
            }
            Err(_) => Err(MapError::FormatError(format!("Unsupported format: {}", raw))),
        }
    }

    /// Classify one axis of a coordinate request by literal shape
    ///
    /// Integer-shaped input (an optional `px` suffix is tolerated) becomes
    /// [`RawCoordinate::PixelInt`], `digits.digits` becomes
    /// [`RawCoordinate::DecimalFloat`], and everything else, blank input
    /// included, is passed through as [`RawCoordinate::DmsText`] without
    /// being decoded.
    ///
    /// # Errors
    /// * `NumberFormatError` if a well-shaped number does not fit its type
    pub fn classify(raw: &str) -> MapResult<RawCoordinate> {
        let raw = raw.trim();

        let classified = if let Some(caps) = PIXEL_SHAPE.captures(raw) {
            let digits = &caps[1];
            let pixel = digits.parse::<i32>().map_err(|e| MapError::bad_int(digits, e))?;
            RawCoordinate::PixelInt(pixel)
        } else if DECIMAL_SHAPE.is_match(raw) {
            let degrees = raw.parse::<f64>().map_err(|e| MapError::bad_float(raw, e))?;
            RawCoordinate::DecimalFloat(degrees)
        } else {
            RawCoordinate::DmsText(raw.to_string())
        };

        debug!("Classified '{}' as {:?}", raw, classified);
        Ok(classified)
    }
}
