//! Grid code to coordinate decoding

use crate::codec::validate::valid;
use crate::core::{LAT_FIELD_DEGREES, LON_FIELD_DEGREES, PAIR_DIVISORS};
use crate::utils::letter_to_number;
use crate::validation::MaidenheadError;

/// Decode a grid code to the center of its smallest cell.
///
/// Returns `(latitude, longitude)` in decimal degrees. Codes are accepted
/// in any letter case.
pub fn grid_code_to_coordinates(code: &str) -> Result<(f64, f64), MaidenheadError> {
    if !valid(code) {
        return Err(MaidenheadError::InvalidLocator {
            locator: code.to_string(),
        });
    }

    let chars: Vec<char> = code.chars().collect();
    let pairs = chars.len() / 2;
    let mut latitude = -90.0;
    let mut longitude = -180.0;

    for (index, pair) in chars.chunks(2).enumerate() {
        let mut lon_cell = f64::from(letter_to_number(pair[0])?);
        let mut lat_cell = f64::from(letter_to_number(pair[1])?);

        if index + 1 == pairs {
            // Land on the center of the last cell, not its south-west corner
            lon_cell += 0.5;
            lat_cell += 0.5;
        }

        latitude += lat_cell * LAT_FIELD_DEGREES / PAIR_DIVISORS[index];
        longitude += lon_cell * LON_FIELD_DEGREES / PAIR_DIVISORS[index];
    }

    Ok((latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode::coordinates_to_grid_code;

    #[test]
    fn test_decodes_square_to_its_center() {
        let (latitude, longitude) = grid_code_to_coordinates("FN31").unwrap();

        assert_eq!(latitude, 41.5);
        assert_eq!(longitude, -73.0);
    }

    #[test]
    fn test_decodes_subsquare_to_its_center() {
        let (latitude, longitude) = grid_code_to_coordinates("FN31pr").unwrap();

        assert!((latitude - 41.729166666666666).abs() < 1e-9);
        assert!((longitude + 72.70833333333333).abs() < 1e-9);
    }

    #[test]
    fn test_decodes_southern_hemisphere() {
        // Wellington, New Zealand
        let (latitude, longitude) = grid_code_to_coordinates("RE78ir").unwrap();

        assert!((latitude + 41.270833333333336).abs() < 1e-9);
        assert!((longitude - 174.70833333333334).abs() < 1e-9);
    }

    #[test]
    fn test_decodes_single_field_to_its_center() {
        let (latitude, longitude) = grid_code_to_coordinates("FN").unwrap();

        assert_eq!(latitude, 45.0);
        assert_eq!(longitude, -70.0);
    }

    #[test]
    fn test_letter_case_does_not_change_the_result() {
        let upper = grid_code_to_coordinates("FN31PR").unwrap();
        let lower = grid_code_to_coordinates("fn31pr").unwrap();

        assert_eq!(upper, lower);

        // Re-encoding normalizes to uppercase fields and lowercase subsquares
        let (latitude, longitude) = lower;
        assert_eq!(coordinates_to_grid_code(latitude, longitude, 3).unwrap(), "FN31pr");
    }

    #[test]
    fn test_rejects_malformed_codes() {
        if let Err(MaidenheadError::InvalidLocator { locator }) = grid_code_to_coordinates("FNXX")
        {
            assert_eq!(locator, "FNXX");
        } else {
            panic!("Expected InvalidLocator error");
        }

        assert!(grid_code_to_coordinates("").is_err());
        assert!(grid_code_to_coordinates("F").is_err());
        assert!(grid_code_to_coordinates("FN31pr55aabb").is_err());
    }

    #[test]
    fn test_decoded_centers_encode_back_to_the_same_code() {
        let codes = [
            "FN", "FN31", "FN31pr", "RE78ir", "JN58td", "GF15wc", "AA00aa", "RR99xx",
            "FN31pr55aa",
        ];

        for code in codes {
            let (latitude, longitude) = grid_code_to_coordinates(code).unwrap();
            let precision = (code.len() / 2) as u8;

            assert_eq!(coordinates_to_grid_code(latitude, longitude, precision).unwrap(), code);
        }
    }

    #[test]
    fn test_encoded_cells_contain_the_input_coordinates() {
        let points = [
            (41.729167, -72.708333), // W1AW, Newington CT
            (-41.28, 174.745),       // Wellington, New Zealand
            (48.14666, 11.60833),    // Munich
            (-34.9011, -56.1645),    // Montevideo
        ];

        for precision in [3u8, 5u8] {
            let divisor = PAIR_DIVISORS[precision as usize - 1];
            let half_cell_lat = LAT_FIELD_DEGREES / divisor / 2.0;
            let half_cell_lon = LON_FIELD_DEGREES / divisor / 2.0;

            for (latitude, longitude) in points {
                let code = coordinates_to_grid_code(latitude, longitude, precision).unwrap();
                let (decoded_lat, decoded_lon) = grid_code_to_coordinates(&code).unwrap();

                assert!((decoded_lat - latitude).abs() <= half_cell_lat);
                assert!((decoded_lon - longitude).abs() <= half_cell_lon);
            }
        }
    }
}
