//! Error classification for grid code and coordinate handling

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{MAX_PRECISION, MIN_PRECISION};

/// Errors produced by the codec, the checks, and the position type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MaidenheadError {
    /// Grid code does not follow the letter/digit pair structure
    InvalidLocator {
        locator: String,
    },
    /// Coordinate outside the representable range of its axis
    OutOfRange {
        axis: String,
        limit: f64,
        value: f64,
    },
    /// Requested pair count outside the supported range
    InvalidPrecision {
        precision: u8,
    },
    /// Character outside the grid code alphabet
    InvalidCharacter {
        character: char,
    },
}

impl fmt::Display for MaidenheadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaidenheadError::InvalidLocator { locator } => {
                write!(
                    f,
                    "invalid locator '{}': expected {} to {} alternating letter/digit pairs",
                    locator, MIN_PRECISION, MAX_PRECISION
                )
            }
            MaidenheadError::OutOfRange { axis, limit, value } => {
                write!(
                    f,
                    "{} {} out of range: must be between -{} and +{}",
                    axis, value, limit, limit
                )
            }
            MaidenheadError::InvalidPrecision { precision } => {
                write!(
                    f,
                    "invalid precision {}: must be between {} and {} pairs",
                    precision, MIN_PRECISION, MAX_PRECISION
                )
            }
            MaidenheadError::InvalidCharacter { character } => {
                write!(
                    f,
                    "invalid character '{}': expected a grid code letter or digit",
                    character
                )
            }
        }
    }
}

impl std::error::Error for MaidenheadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_offending_value() {
        let error = MaidenheadError::OutOfRange {
            axis: "latitude".to_string(),
            limit: 90.0,
            value: 91.0,
        };
        let message = error.to_string();
        assert!(message.contains("latitude"));
        assert!(message.contains("91"));
        assert!(message.contains("-90"));
    }

    #[test]
    fn test_display_precision_bounds() {
        let error = MaidenheadError::InvalidPrecision { precision: 6 };
        let message = error.to_string();
        assert!(message.contains('6'));
        assert!(message.contains("1 and 5"));
    }

    #[test]
    fn test_error_serialization_round_trip() {
        let error = MaidenheadError::InvalidLocator {
            locator: "FNXX".to_string(),
        };

        let json = serde_json::to_string(&error).unwrap();
        let restored: MaidenheadError = serde_json::from_str(&json).unwrap();

        assert_eq!(error, restored);
    }
}
