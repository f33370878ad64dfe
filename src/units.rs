//! Distances are plain `f64` meters and resolutions are pixels per meter.
//!
//! Multiply by a unit to get meters, divide by a unit to get a resolution:
//! a letter page with 1 inch margins is `6.5 * INCH` wide, and on a
//! 150 pixel/cm device that is `6.5 * INCH * (150.0 / CM)` columns.

use crate::error::ImagenError;

pub const M: f64 = 1.0;
pub const CM: f64 = 0.01;
pub const MM: f64 = 0.001;
pub const INCH: f64 = 0.0254;
pub const FT: f64 = 0.3048;

/// Meters per unit for a unit name.
pub fn unit_factor(unit: &str) -> Result<f64, ImagenError> {
    match unit {
        "m" => Ok(M),
        "cm" => Ok(CM),
        "mm" => Ok(MM),
        "in" => Ok(INCH),
        "ft" => Ok(FT),
        _ => Err(ImagenError::UnknownUnit(unit.to_string())),
    }
}

/// Parses a distance literal such as `1.25cm`, `.25in` or `3ft` into meters.
///
/// Only a digits, optional point, digits form is accepted, followed by a
/// lowercase unit. Signs, exponents and whitespace are rejected.
pub fn parse_distance(literal: &str) -> Result<f64, ImagenError> {
    let malformed = || ImagenError::MalformedLiteral(literal.to_string());
    let bytes = literal.as_bytes();

    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = end;
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
    }
    let frac_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if int_digits + (end - frac_start) == 0 {
        return Err(malformed());
    }

    let (number, unit) = literal.split_at(end);
    if unit.is_empty() || !unit.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(malformed());
    }

    let value: f64 = number
        .parse()
        .map_err(|_| ImagenError::InvalidNumber(number.to_string()))?;
    Ok(value * unit_factor(unit)?)
}
