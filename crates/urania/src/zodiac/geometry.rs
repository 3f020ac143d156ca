//! Ecliptic geometry helpers.
//!
//! Conversions between (sign, degree within sign) and absolute longitude on
//! the 0-360 circle, plus parsing of `25°30` style degree strings.

use crate::error::ChartError;
use crate::zodiac::types::{Sign, SIGN_COUNT, SIGN_WIDTH};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DEGREE_PATTERN: Regex =
        Regex::new(r"^(\d+(?:\.\d+)?)\s*(?:°\s*(\d+(?:\.\d+)?)?\s*'?)?$")
            .expect("degree pattern is a valid regex");
}

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let mut normalized = value % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    normalized
}

/// Forward distance travelling through increasing longitude, in [0, 360).
pub fn forward_distance(from: f64, to: f64) -> f64 {
    normalize_degrees(to - from)
}

pub fn sign_index(sign: Sign) -> usize {
    sign.index()
}

pub fn sign_index_from_code(code: &str) -> Result<usize, ChartError> {
    Sign::from_code(code).map(Sign::index)
}

/// Absolute longitude for a degree within the sign at `sign_index`.
///
/// A degree of exactly 30 is accepted and rolls into the following sign.
pub fn absolute_longitude(sign_index: usize, degree: f64) -> Result<f64, ChartError> {
    if sign_index >= SIGN_COUNT {
        return Err(ChartError::invalid(format!(
            "sign index must be in 0..12, got {}",
            sign_index
        )));
    }
    if !degree.is_finite() || !(0.0..=SIGN_WIDTH).contains(&degree) {
        return Err(ChartError::invalid(format!(
            "degree within sign must be in [0, 30], got {}",
            degree
        )));
    }
    Ok(normalize_degrees(sign_index as f64 * SIGN_WIDTH + degree))
}

/// Sign and degree within sign for an absolute longitude.
pub fn sign_of_longitude(longitude: f64) -> (Sign, f64) {
    let normalized = normalize_degrees(longitude);
    let index = ((normalized / SIGN_WIDTH).floor() as usize) % SIGN_COUNT;
    let sign = Sign::ALL[index];
    (sign, normalized - sign.start_longitude())
}

/// Parse `"25°30"` into `25.5`. Minutes are optional; an empty string is 0.
pub fn normalize_degree_string(text: &str) -> Result<f64, ChartError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let caps = DEGREE_PATTERN
        .captures(trimmed)
        .ok_or_else(|| ChartError::invalid(format!("unparsable degree string: {:?}", text)))?;

    let degrees: f64 = caps[1]
        .parse()
        .map_err(|_| ChartError::invalid(format!("bad degrees in {:?}", text)))?;
    let minutes: f64 = match caps.get(2) {
        Some(m) => m
            .as_str()
            .parse()
            .map_err(|_| ChartError::invalid(format!("bad minutes in {:?}", text)))?,
        None => 0.0,
    };
    if minutes >= 60.0 {
        return Err(ChartError::invalid(format!(
            "minutes must be below 60 in {:?}",
            text
        )));
    }

    Ok(degrees + minutes / 60.0)
}
