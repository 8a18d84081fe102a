//! Core value types and grid system constants

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;
