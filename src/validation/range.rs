//! Range checks shared by the codec and the position type

use crate::core::{MAX_PRECISION, MIN_PRECISION};
use crate::validation::error::MaidenheadError;

/// Check that a coordinate sits inside `[-limit, +limit]` for its axis.
///
/// Boundary values pass: +90 latitude and -180 longitude are representable.
/// Non-finite values are rejected so a position can never hold NaN.
pub fn range_check(axis: &str, limit: f64, value: f64) -> Result<(), MaidenheadError> {
    if !value.is_finite() || value < -limit || value > limit {
        return Err(MaidenheadError::OutOfRange {
            axis: axis.to_string(),
            limit,
            value,
        });
    }
    Ok(())
}

/// Check that a pair count is representable by the code alphabet.
pub fn precision_check(precision: u8) -> Result<(), MaidenheadError> {
    if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        return Err(MaidenheadError::InvalidPrecision { precision });
    }
    Ok(())
}
