//! GPS coordinates embedded in free-text customer locations.
//!
//! Location text is written by the dashboard as a human-readable address
//! optionally followed by a `GPS: <lat>, <lng>` tag. The tag is parsed once,
//! at ingestion, into a [`Location`] so the routing code never looks at
//! strings again.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static GPS_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"GPS:\s*(-?[0-9]+\.?[0-9]*),\s*(-?[0-9]+\.?[0-9]*)")
        .expect("GPS tag pattern is valid")
});

/// A latitude/longitude pair in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Finite and within [-90, 90] x [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Renders the tag that [`parse_coordinate`] reads back.
    pub fn format_gps_tag(&self) -> String {
        format!("GPS: {:.6}, {:.6}", self.lat, self.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

/// Extracts the first `GPS: <lat>, <lng>` tag found anywhere in `text`.
///
/// Returns `None` when there is no tag, or when either number is not a
/// finite value inside the valid latitude/longitude ranges. A missing
/// coordinate is never reported as `(0, 0)`.
pub fn parse_coordinate(text: &str) -> Option<Coordinate> {
    let captures = GPS_TAG.captures(text)?;
    let lat = captures.get(1)?.as_str().parse::<f64>().ok()?;
    let lng = captures.get(2)?.as_str().parse::<f64>().ok()?;

    let coordinate = Coordinate::new(lat, lng);
    coordinate.is_valid().then_some(coordinate)
}

/// A customer location: the address text as stored, plus the coordinate
/// parsed out of it (if any).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    pub address: String,
    pub coordinate: Option<Coordinate>,
}

impl Location {
    /// Parses raw location text from the store.
    pub fn parse(text: &str) -> Self {
        Self {
            address: text.to_string(),
            coordinate: parse_coordinate(text),
        }
    }

    /// Builds the stored text for an address pinned to a coordinate,
    /// e.g. `"12 Station Rd (GPS: 9.384489, 80.408737)"`.
    pub fn with_coordinate(address: &str, coordinate: Coordinate) -> Self {
        let address = address.trim();
        let text = if address.is_empty() {
            coordinate.format_gps_tag()
        } else {
            format!("{} ({})", address, coordinate.format_gps_tag())
        };

        Self {
            address: text,
            coordinate: Some(coordinate),
        }
    }

    pub fn is_geo_tagged(&self) -> bool {
        self.coordinate.is_some()
    }
}
