//! Great-circle math and the compass rose

pub mod compass;
pub mod sphere;

pub use compass::{compass_bearing, CompassBand, COMPASS_BANDS};
pub use sphere::{great_circle_distance, initial_bearing, DistanceUnit};
