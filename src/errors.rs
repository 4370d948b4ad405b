//! Custom error types for coordinate and map fragment processing

use std::error::Error;
use std::fmt;
use std::io;
use std::num::{ParseFloatError, ParseIntError};

/// Cause of a failed numeric token parse
#[derive(Debug)]
pub enum NumberCause {
    /// Token was expected to be an integer
    Int(ParseIntError),
    /// Token was expected to be a real number
    Float(ParseFloatError),
}

impl fmt::Display for NumberCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberCause::Int(e) => write!(f, "{}", e),
            NumberCause::Float(e) => write!(f, "{}", e),
        }
    }
}

/// Map-specific error types
#[derive(Debug)]
pub enum MapError {
    /// Empty, blank or unrecognized coordinate text
    FormatError(String),
    /// A numeric token inside a coordinate failed to parse
    NumberFormatError {
        /// The offending token
        token: String,
        /// Underlying parse failure
        cause: NumberCause,
    },
    /// Crop rectangle is degenerate or out of bounds, or bitmap encoding failed
    ExtractionError {
        /// What went wrong
        message: String,
        /// Underlying cause, if any
        source: Option<Box<dyn Error + Send + Sync>>,
    },
    /// I/O error
    IoError(io::Error),
    /// Raster decoding error
    ImageError(image::ImageError),
    /// Invalid calibration document
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl MapError {
    /// Build an extraction error without an underlying cause
    pub fn extraction(message: impl Into<String>) -> Self {
        MapError::ExtractionError { message: message.into(), source: None }
    }

    /// Build an extraction error wrapping its cause
    pub fn extraction_caused_by<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        MapError::ExtractionError {
            message: message.into(),
            source: Some(Box::new(cause)),
        }
    }

    /// Build a number format error for an integer token
    pub fn bad_int(token: &str, e: ParseIntError) -> Self {
        MapError::NumberFormatError { token: token.to_string(), cause: NumberCause::Int(e) }
    }

    /// Build a number format error for a real-number token
    pub fn bad_float(token: &str, e: ParseFloatError) -> Self {
        MapError::NumberFormatError { token: token.to_string(), cause: NumberCause::Float(e) }
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::FormatError(msg) => write!(f, "Format error: {}", msg),
            MapError::NumberFormatError { token, cause } => {
                write!(f, "Invalid number '{}': {}", token, cause)
            }
            MapError::ExtractionError { message, source } => match source {
                Some(cause) => write!(f, "Cannot cut map fragment: {} ({})", message, cause),
                None => write!(f, "Cannot cut map fragment: {}", message),
            },
            MapError::IoError(e) => write!(f, "I/O error: {}", e),
            MapError::ImageError(e) => write!(f, "Image error: {}", e),
            MapError::ConfigError(msg) => write!(f, "Calibration error: {}", msg),
            MapError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl Error for MapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MapError::NumberFormatError { cause: NumberCause::Int(e), .. } => Some(e),
            MapError::NumberFormatError { cause: NumberCause::Float(e), .. } => Some(e),
            MapError::ExtractionError { source: Some(cause), .. } => Some(cause.as_ref()),
            MapError::IoError(e) => Some(e),
            MapError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MapError {
    fn from(error: io::Error) -> Self {
        MapError::IoError(error)
    }
}

impl From<image::ImageError> for MapError {
    fn from(error: image::ImageError) -> Self {
        MapError::ImageError(error)
    }
}

/// Result type for map operations
pub type MapResult<T> = Result<T, MapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_error_keeps_cause() {
        let cause = io::Error::new(io::ErrorKind::Other, "disk gone");
        let err = MapError::extraction_caused_by("encoding failed", cause);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("disk gone"));
    }

    #[test]
    fn test_number_format_error_reports_token() {
        let e = "12x".parse::<f64>().unwrap_err();
        let err = MapError::bad_float("12x", e);
        assert!(err.to_string().contains("12x"));
        assert!(err.source().is_some());
    }
}
