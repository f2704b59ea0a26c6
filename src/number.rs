//! Decimal rounding and the string form of matrix values

use crate::error::{MatrixMillError, Result};

/// Round `value` to `decimals` places, ties to even
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round_ties_even() / scale;
    // Collapse -0.0 so it never leaks into the files as "-0.0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Smallest grid step `k` with `k / 10^decimals >= value`
///
/// Values within float noise of a grid point snap to it, so `0.07` at two
/// decimals is step 7 rather than 8.
pub fn grid_ceil(value: f64, decimals: u32) -> f64 {
    let scaled = value * 10f64.powi(decimals as i32);
    let nearest = scaled.round();
    if (scaled - nearest).abs() < 1e-6 {
        nearest
    } else {
        scaled.ceil()
    }
}

/// Render a value as a float string: `7.0`, `-3.0`, `12.34`
///
/// Integral values keep one trailing decimal; everything else uses the
/// shortest representation that parses back to the same `f64`.
pub fn format_value(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Render a matrix cell; diagonal cells are written as a bare `0`
pub fn format_cell(value: f64, on_diagonal: bool) -> String {
    if on_diagonal {
        "0".to_string()
    } else {
        format_value(value)
    }
}

/// Parse a numeric string cell
pub fn parse_cell(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| MatrixMillError::invalid_matrix(format!("'{}' is not a number", raw)))?;
    if !value.is_finite() {
        return Err(MatrixMillError::invalid_matrix(format!(
            "'{}' is not a finite number",
            raw
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_two_decimals() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(-4.999, 2), -5.0);
        assert_eq!(round_to(7.0, 2), 7.0);
    }

    #[test]
    fn test_round_never_yields_negative_zero() {
        let rounded = round_to(-0.001, 2);
        assert!(rounded.is_sign_positive());
        assert_eq!(format_value(rounded), "0.0");
    }

    #[test]
    fn test_grid_ceil_snaps_inexact_products() {
        assert_eq!(grid_ceil(0.07, 2), 7.0);
        assert_eq!(grid_ceil(0.29, 2), 29.0);
        assert_eq!(grid_ceil(-5.0, 2), -500.0);
        assert_eq!(grid_ceil(0.071, 2), 8.0);
        assert_eq!(grid_ceil(-0.079, 2), -7.0);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(-3.0), "-3.0");
        assert_eq!(format_value(7.0), "7.0");
        assert_eq!(format_value(12.34), "12.34");
        assert_eq!(format_value(-0.5), "-0.5");
    }

    #[test]
    fn test_format_cell_diagonal() {
        assert_eq!(format_cell(0.0, true), "0");
        assert_eq!(format_cell(0.0, false), "0.0");
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("12.34").unwrap(), 12.34);
        assert_eq!(parse_cell(" -5.0 ").unwrap(), -5.0);
        assert_eq!(parse_cell("0").unwrap(), 0.0);
        assert!(parse_cell("abc").is_err());
        assert!(parse_cell("NaN").is_err());
    }
}
