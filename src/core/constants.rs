//! Physical constants and grid system parameters

/// Mean Earth radius for the spherical distance model (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Mean Earth radius for the spherical distance model (m)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Largest latitude magnitude accepted for a position (degrees)
pub const LATITUDE_LIMIT: f64 = 90.0;

/// Largest longitude magnitude accepted for a position (degrees)
pub const LONGITUDE_LIMIT: f64 = 180.0;

/// Smallest supported grid code length in character pairs
pub const MIN_PRECISION: u8 = 1;

/// Largest supported grid code length in character pairs
pub const MAX_PRECISION: u8 = 5;

/// Pair count used when no precision is requested (field, square, subsquare)
pub const DEFAULT_PRECISION: u8 = 3;

/// Bias added to normalized coordinates before cell extraction, so values
/// sitting exactly on a cell boundary encode into the upper cell
pub const CELL_BIAS: f64 = 0.0000001;

/// Number of field cells along each axis at the first pair level
pub const FIELD_CELLS: f64 = 18.0;

/// Number of cells per field subdivision at digit pair levels
pub const SQUARE_CELLS: f64 = 10.0;

/// Number of cells per square subdivision at letter pair levels
pub const SUBSQUARE_CELLS: f64 = 24.0;

/// Latitude span of one field cell (degrees)
pub const LAT_FIELD_DEGREES: f64 = 10.0;

/// Longitude span of one field cell (degrees)
pub const LON_FIELD_DEGREES: f64 = 20.0;

/// Cumulative divisors applied to the field cell span when decoding
/// successive pairs (1, 10, 10*24, 10*24*10, 10*24*10*24)
pub const PAIR_DIVISORS: [f64; 5] = [1.0, 10.0, 240.0, 2400.0, 57600.0];

/// Significant figures kept by coordinate accessors
pub const COORDINATE_SIG_FIGURES: u32 = 6;
