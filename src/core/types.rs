//! Located position value type

use std::cell::OnceCell;

use serde::{Deserialize, Serialize};

use crate::codec::encode::encode_cells;
use crate::codec::grid_code_to_coordinates;
use crate::core::{COORDINATE_SIG_FIGURES, DEFAULT_PRECISION, LATITUDE_LIMIT, LONGITUDE_LIMIT};
use crate::geodesy::{compass_bearing, great_circle_distance, initial_bearing, DistanceUnit};
use crate::utils::round_significant;
use crate::validation::{precision_check, range_check, MaidenheadError};

/// Geographic position with a grid code representation.
///
/// A position is immutable once constructed; the `with_*` builders return
/// new validated values, so a cached locator can never go stale. The cache
/// is excluded from comparisons and serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    latitude: f64,
    longitude: f64,
    precision: u8,
    #[serde(skip)]
    locator: OnceCell<String>,
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.latitude == other.latitude
            && self.longitude == other.longitude
            && self.precision == other.precision
    }
}

impl Position {
    /// Position from decimal degrees at the default precision.
    pub fn from_coordinates(latitude: f64, longitude: f64) -> Result<Self, MaidenheadError> {
        Self::from_coordinates_with_precision(latitude, longitude, DEFAULT_PRECISION)
    }

    /// Position from decimal degrees with an explicit pair count.
    pub fn from_coordinates_with_precision(
        latitude: f64,
        longitude: f64,
        precision: u8,
    ) -> Result<Self, MaidenheadError> {
        range_check("latitude", LATITUDE_LIMIT, latitude)?;
        range_check("longitude", LONGITUDE_LIMIT, longitude)?;
        precision_check(precision)?;

        Ok(Self {
            latitude,
            longitude,
            precision,
            locator: OnceCell::new(),
        })
    }

    /// Position from an existing grid code, kept verbatim as the locator.
    ///
    /// The precision is taken from the code length.
    pub fn from_locator(locator: &str) -> Result<Self, MaidenheadError> {
        let (latitude, longitude) = grid_code_to_coordinates(locator)?;

        Ok(Self {
            latitude,
            longitude,
            precision: (locator.len() / 2) as u8,
            locator: OnceCell::from(locator.to_string()),
        })
    }

    /// Position from an existing grid code with the re-encoding precision
    /// overridden. The code itself is still kept verbatim.
    pub fn from_locator_with_precision(
        locator: &str,
        precision: u8,
    ) -> Result<Self, MaidenheadError> {
        precision_check(precision)?;
        let (latitude, longitude) = grid_code_to_coordinates(locator)?;

        Ok(Self {
            latitude,
            longitude,
            precision,
            locator: OnceCell::from(locator.to_string()),
        })
    }

    /// Latitude in decimal degrees, rounded to six significant figures.
    pub fn latitude(&self) -> f64 {
        round_significant(self.latitude, COORDINATE_SIG_FIGURES)
    }

    /// Longitude in decimal degrees, rounded to six significant figures.
    pub fn longitude(&self) -> f64 {
        round_significant(self.longitude, COORDINATE_SIG_FIGURES)
    }

    /// Number of character pairs in the locator representation.
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Grid code for this position, encoded once and cached.
    pub fn locator(&self) -> &str {
        self.locator
            .get_or_init(|| encode_cells(self.latitude(), self.longitude(), self.precision))
    }

    /// New position with a different latitude.
    pub fn with_latitude(&self, latitude: f64) -> Result<Self, MaidenheadError> {
        Self::from_coordinates_with_precision(latitude, self.longitude, self.precision)
    }

    /// New position with a different longitude.
    pub fn with_longitude(&self, longitude: f64) -> Result<Self, MaidenheadError> {
        Self::from_coordinates_with_precision(self.latitude, longitude, self.precision)
    }

    /// New position re-encoded at a different precision.
    pub fn with_precision(&self, precision: u8) -> Result<Self, MaidenheadError> {
        Self::from_coordinates_with_precision(self.latitude, self.longitude, precision)
    }

    /// Great-circle distance to `other` in `unit`.
    pub fn distance_to(&self, other: &Position, unit: DistanceUnit) -> f64 {
        great_circle_distance(
            self.latitude(),
            self.longitude(),
            other.latitude(),
            other.longitude(),
            unit,
        )
    }

    /// Initial great-circle bearing towards `other`, in integer degrees
    /// clockwise from north.
    pub fn bearing_to(&self, other: &Position) -> u16 {
        initial_bearing(
            self.latitude(),
            self.longitude(),
            other.latitude(),
            other.longitude(),
        )
    }

    /// Compass point towards `other`, when the bearing falls inside a
    /// named band of the rose.
    pub fn compass_bearing_to(&self, other: &Position) -> Option<&'static str> {
        compass_bearing(f64::from(self.bearing_to(other)))
    }
}
