//! Tests for the free-form px/DMS/decimal parsing rule

extern crate std;

use crate::coordinate::{CoordinateFormatParser, ParsedCoordinate};
use crate::errors::MapError;

#[test]
fn test_pixel_suffix_yields_pixel() {
    let parsed = CoordinateFormatParser::parse("500px").unwrap();
    std::assert_eq!(parsed, ParsedCoordinate::Pixel(500));
    std::assert_eq!(parsed.to_string(), "500px");
}

#[test]
fn test_pixel_suffix_is_trimmed_first() {
    std::assert_eq!(CoordinateFormatParser::parse("  -12px \n").unwrap(), ParsedCoordinate::Pixel(-12));
}

#[test]
fn test_malformed_pixel_is_number_format_error() {
    let result = CoordinateFormatParser::parse("12.5px");
    std::assert!(matches!(result, Err(MapError::NumberFormatError { .. })));
    let result = CoordinateFormatParser::parse("px");
    std::assert!(matches!(result, Err(MapError::NumberFormatError { .. })));
}

#[test]
fn test_degree_sign_yields_dms_degrees() {
    match CoordinateFormatParser::parse("54°27'26.5\" N").unwrap() {
        ParsedCoordinate::Degrees(d) => std::assert!((d - 54.45736).abs() < 1e-5),
        other => std::panic!("expected degrees, got {:?}", other),
    }
}

#[test]
fn test_plain_number_yields_degrees() {
    std::assert_eq!(CoordinateFormatParser::parse("18.57").unwrap(), ParsedCoordinate::Degrees(18.57));
    // Without a suffix an integer is degrees, not a pixel
    std::assert_eq!(CoordinateFormatParser::parse("500").unwrap(), ParsedCoordinate::Degrees(500.0));
}

#[test]
fn test_blank_is_format_error() {
    std::assert!(matches!(CoordinateFormatParser::parse(""), Err(MapError::FormatError(_))));
    std::assert!(matches!(CoordinateFormatParser::parse(" \t "), Err(MapError::FormatError(_))));
}

#[test]
fn test_dms_without_degree_sign_is_unsupported() {
    match CoordinateFormatParser::parse("54 27 26.5 N") {
        Err(MapError::FormatError(msg)) => std::assert!(msg.contains("Unsupported format")),
        other => std::panic!("expected format error, got {:?}", other),
    }
}
