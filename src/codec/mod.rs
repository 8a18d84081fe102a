//! Bidirectional codec between coordinates and grid codes

pub mod decode;
pub mod encode;
pub mod validate;

pub use decode::grid_code_to_coordinates;
pub use encode::coordinates_to_grid_code;
pub use validate::valid;
