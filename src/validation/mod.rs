//! Input validation for coordinates, precision, and grid codes

pub mod error;
pub mod range;

pub use error::MaidenheadError;
pub use range::{precision_check, range_check};
