//! Coordinate to grid code encoding

use crate::core::{
    CELL_BIAS, FIELD_CELLS, LATITUDE_LIMIT, LAT_FIELD_DEGREES, LONGITUDE_LIMIT,
    LON_FIELD_DEGREES, SQUARE_CELLS, SUBSQUARE_CELLS,
};
use crate::utils::number_to_letter;
use crate::validation::{precision_check, range_check, MaidenheadError};

/// Encode a coordinate pair into a grid code of `precision` pairs.
///
/// Latitude and longitude are decimal degrees; the axis boundaries are
/// accepted and encode into the outermost cells. The longitude character
/// comes first in every pair.
pub fn coordinates_to_grid_code(
    latitude: f64,
    longitude: f64,
    precision: u8,
) -> Result<String, MaidenheadError> {
    range_check("latitude", LATITUDE_LIMIT, latitude)?;
    range_check("longitude", LONGITUDE_LIMIT, longitude)?;
    precision_check(precision)?;

    Ok(encode_cells(latitude, longitude, precision))
}

/// Encoding core shared with the position type, which validates on
/// construction and re-encodes without re-checking.
pub(crate) fn encode_cells(latitude: f64, longitude: f64, precision: u8) -> String {
    let mut lat = normalized(latitude, LATITUDE_LIMIT, LAT_FIELD_DEGREES);
    let mut lon = normalized(longitude, LONGITUDE_LIMIT, LON_FIELD_DEGREES);

    let mut code = String::with_capacity(precision as usize * 2);
    code.push(number_to_letter(lon.trunc() as u32).to_ascii_uppercase());
    code.push(number_to_letter(lat.trunc() as u32).to_ascii_uppercase());

    for level in 1..precision {
        if level % 2 == 1 {
            lat = lat.fract() * SQUARE_CELLS;
            lon = lon.fract() * SQUARE_CELLS;
            code.push(char::from(b'0' + lon.trunc() as u8));
            code.push(char::from(b'0' + lat.trunc() as u8));
        } else {
            lat = lat.fract() * SUBSQUARE_CELLS;
            lon = lon.fract() * SUBSQUARE_CELLS;
            code.push(number_to_letter(lon.trunc() as u32));
            code.push(number_to_letter(lat.trunc() as u32));
        }
    }

    code
}

/// Shift an axis value into field cell units, biased off cell boundaries
/// and pulled below the top edge so +limit stays inside the last field.
fn normalized(value: f64, limit: f64, field_degrees: f64) -> f64 {
    let cells = (value + limit) / field_degrees + CELL_BIAS;
    cells.min(FIELD_CELLS - CELL_BIAS)
}
