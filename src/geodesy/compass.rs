//! Compass rose lookup for numeric headings

/// Named compass band with exclusive degree boundaries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompassBand {
    pub label: &'static str,
    pub start: f64,
    pub end: f64,
}

/// Compass bands in table order.
///
/// A heading belongs to a band only strictly between its boundaries. The
/// table keeps the historical gaps (33..34, 78..79, 101..102, ...), so
/// boundary and gap headings name no band.
pub const COMPASS_BANDS: [CompassBand; 17] = [
    CompassBand { label: "N", start: 0.0, end: 11.0 },
    CompassBand { label: "NNE", start: 11.0, end: 33.0 },
    CompassBand { label: "NE", start: 34.0, end: 56.0 },
    CompassBand { label: "ENE", start: 57.0, end: 78.0 },
    CompassBand { label: "E", start: 79.0, end: 101.0 },
    CompassBand { label: "ESE", start: 102.0, end: 123.0 },
    CompassBand { label: "SE", start: 124.0, end: 146.0 },
    CompassBand { label: "SSE", start: 147.0, end: 168.0 },
    CompassBand { label: "S", start: 169.0, end: 191.0 },
    CompassBand { label: "SSW", start: 192.0, end: 213.0 },
    CompassBand { label: "SW", start: 214.0, end: 236.0 },
    CompassBand { label: "WSW", start: 237.0, end: 258.0 },
    CompassBand { label: "W", start: 259.0, end: 281.0 },
    CompassBand { label: "WNW", start: 282.0, end: 303.0 },
    CompassBand { label: "NW", start: 304.0, end: 326.0 },
    CompassBand { label: "NNW", start: 327.0, end: 348.0 },
    CompassBand { label: "N", start: 349.0, end: 360.0 },
];

/// Name the compass band containing `heading`, in degrees clockwise from
/// north. Headings outside 0..=360 or on a band boundary have no name.
pub fn compass_bearing(heading: f64) -> Option<&'static str> {
    if !(0.0..=360.0).contains(&heading) {
        return None;
    }

    COMPASS_BANDS
        .iter()
        .find(|band| band.start < heading && heading < band.end)
        .map(|band| band.label)
}
