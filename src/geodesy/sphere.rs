//! Great-circle distance and bearing on a spherical Earth model

use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::core::{EARTH_RADIUS_KM, EARTH_RADIUS_M};
use crate::utils::{degrees_to_radians, radians_to_degrees};

/// Unit for reported great-circle distances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    Kilometers,
    Meters,
}

impl DistanceUnit {
    /// Earth radius expressed in this unit
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Kilometers => EARTH_RADIUS_KM,
            DistanceUnit::Meters => EARTH_RADIUS_M,
        }
    }
}

impl Default for DistanceUnit {
    fn default() -> Self {
        DistanceUnit::Kilometers
    }
}

/// Great-circle distance between two coordinates by the spherical law of
/// cosines. Inputs are decimal degrees; the result is in `unit`.
pub fn great_circle_distance(
    lat_a: f64,
    lon_a: f64,
    lat_b: f64,
    lon_b: f64,
    unit: DistanceUnit,
) -> f64 {
    unit.earth_radius() * central_angle(lat_a, lon_a, lat_b, lon_b)
}

/// Initial great-circle bearing from A towards B, in integer degrees
/// clockwise from north. Coincident and antipodal points bear north.
pub fn initial_bearing(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> u16 {
    let ca = central_angle(lat_a, lon_a, lat_b, lon_b);
    let lat_a = degrees_to_radians(lat_a);
    let lat_b = degrees_to_radians(lat_b);
    let delta = degrees_to_radians(lon_b - lon_a);

    let si = delta.sin() * lat_b.cos() * lat_a.cos();
    let co = lat_b.sin() - lat_a.sin() * ca.cos();

    if si == 0.0 && co == 0.0 {
        return 0;
    }

    let mut az = (si / co).abs().atan();
    if co < 0.0 {
        az = PI - az;
    }
    if si < 0.0 {
        az = -az;
    }
    if az < 0.0 {
        az += 2.0 * PI;
    }

    (radians_to_degrees(az).round() as u16) % 360
}

/// Central angle between two coordinates (radians).
fn central_angle(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    let delta = degrees_to_radians(lon_a - lon_b);
    let lat_a = degrees_to_radians(lat_a);
    let lat_b = degrees_to_radians(lat_b);

    // Rounding can push the cosine a hair past 1 for coincident points,
    // which would turn the square root below into NaN
    let co = (delta.cos() * lat_a.cos() * lat_b.cos() + lat_a.sin() * lat_b.sin())
        .clamp(-1.0, 1.0);

    if co == 0.0 {
        return FRAC_PI_2;
    }

    let ca = ((1.0 - co * co).sqrt() / co).abs().atan();
    if co < 0.0 {
        PI - ca
    } else {
        ca
    }
}
