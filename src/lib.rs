//! Maidenhead Locator System
//!
//! Bidirectional conversion between geographic coordinates and Maidenhead
//! grid codes as used in amateur radio, with great-circle distance, bearing,
//! and compass point calculations between located positions.

pub mod codec;
pub mod core;
pub mod geodesy;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use codec::{coordinates_to_grid_code, grid_code_to_coordinates, valid};
pub use crate::core::{
    Position, DEFAULT_PRECISION, EARTH_RADIUS_KM, EARTH_RADIUS_M, MAX_PRECISION, MIN_PRECISION,
};
pub use geodesy::{
    compass_bearing, great_circle_distance, initial_bearing, CompassBand, DistanceUnit,
    COMPASS_BANDS,
};
pub use utils::{
    degrees_to_radians, letter_to_number, number_to_letter, radians_to_degrees, round_significant,
};
pub use validation::{precision_check, range_check, MaidenheadError};
