//! Angle conversions and decimal rounding helpers

/// Convert an angle in degrees to radians
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Convert an angle in radians to degrees
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Round a value to the given number of decimal significant figures.
///
/// Zero and non-finite values are returned unchanged.
pub fn round_significant(value: f64, figures: u32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }

    let magnitude = value.abs().log10().floor() as i32;
    let factor = 10f64.powi(figures as i32 - 1 - magnitude);
    (value * factor).round() / factor
}
