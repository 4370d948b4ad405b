//! Degrees/minutes/seconds notation
//!
//! Converts between decimal degrees and DMS text such as
//! `54°27'26.500" N`. Decoding is lenient about separator glyphs;
//! encoding always produces the same fixed pattern.

use log::debug;
use crate::errors::{MapError, MapResult};

/// Glyphs accepted between the degree, minute and second fields
const SEPARATORS: [char; 9] = [
    '°',        // degree sign
    '\'',       // apostrophe used as prime
    '\u{2018}', // left single quotation mark
    '\u{2019}', // right single quotation mark
    '\u{2032}', // prime
    '"',        // quotation mark used as double prime
    '\u{201C}', // left double quotation mark
    '\u{201D}', // right double quotation mark
    '\u{2033}', // double prime
];

/// Codec between decimal degrees and DMS text
pub struct DmsCodec;

impl DmsCodec {
    /// Decode DMS text into signed decimal degrees
    ///
    /// A trailing `S` or `W` (any case) makes the result negative; `N` and
    /// `E` are stripped without changing the sign. Missing minutes or
    /// seconds count as zero, and tokens beyond the seconds are ignored.
    ///
    /// # Errors
    /// * `FormatError` if the text is empty or blank
    /// * `NumberFormatError` if a degree, minute or second token is not a number
    pub fn decode(text: &str) -> MapResult<f64> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(MapError::FormatError("Empty DMS".to_string()));
        }

        let (sign, body) = split_hemisphere(trimmed);

        let normalized: String = body
            .chars()
            .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
            .collect();

        let mut fields = [0.0f64; 3];
        for (slot, token) in fields.iter_mut().zip(normalized.split_whitespace()) {
            *slot = token.parse::<f64>().map_err(|e| MapError::bad_float(token, e))?;
        }
        let [degrees, minutes, seconds] = fields;

        let decimal = sign * (degrees + minutes / 60.0 + seconds / 3600.0);
        debug!("Decoded DMS '{}' -> {}", text, decimal);
        Ok(decimal)
    }

    /// Encode decimal degrees as DMS text
    ///
    /// The output is always `<deg>°<min>'<sec.sss>" <H>` where the
    /// hemisphere letter follows the sign (`N`/`S` for latitude, `E`/`W`
    /// for longitude, zero counting as positive).
    pub fn encode(decimal: f64, is_latitude: bool) -> String {
        let hemisphere = match (is_latitude, decimal >= 0.0) {
            (true, true) => 'N',
            (true, false) => 'S',
            (false, true) => 'E',
            (false, false) => 'W',
        };

        let abs = decimal.abs();
        let degrees = abs.trunc();
        let minutes_full = (abs - degrees) * 60.0;
        let minutes = minutes_full.trunc();
        let seconds = (minutes_full - minutes) * 60.0;

        format!("{}°{}'{:.3}\" {}", degrees as i64, minutes as i64, seconds, hemisphere)
    }
}

/// Strip a trailing hemisphere letter, returning the sign it implies
fn split_hemisphere(text: &str) -> (f64, &str) {
    match text.chars().last() {
        Some(c) if matches!(c.to_ascii_uppercase(), 'N' | 'S' | 'E' | 'W') => {
            let sign = if matches!(c.to_ascii_uppercase(), 'S' | 'W') { -1.0 } else { 1.0 };
            (sign, &text[..text.len() - c.len_utf8()])
        }
        _ => (1.0, text),
    }
}
