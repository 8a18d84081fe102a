//! Angle math and code alphabet helpers

pub mod angles;
pub mod mapping;

pub use angles::{degrees_to_radians, radians_to_degrees, round_significant};
pub use mapping::{letter_to_number, number_to_letter};
