//! Locations around Kilinochchi for realistic test fixtures.
//!
//! Coordinates are approximate.

use route_planner::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Place {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    /// Location text as the dashboard stores it.
    pub fn location_text(&self) -> String {
        format!("{} (GPS: {}, {})", self.name, self.lat, self.lng)
    }
}

pub const DEPOT: Place = Place::new("Distribution Center", 9.384489, 80.408737);

// ============================================================================
// North, along the A9 towards Paranthan
// ============================================================================

pub const NORTH: &[Place] = &[
    Place::new("Kanagapuram", 9.4010, 80.4030),
    Place::new("Paranthan Junction", 9.4330, 80.3960),
    Place::new("Umaiyalpuram", 9.4520, 80.3890),
    Place::new("Elephant Pass Road", 9.4780, 80.3850),
];

// ============================================================================
// South, along the A9 towards Iranamadu
// ============================================================================

pub const SOUTH: &[Place] = &[
    Place::new("Iranamadu Junction", 9.3420, 80.4140),
    Place::new("Murikandy", 9.2870, 80.4320),
    Place::new("Thiruvaiyaru", 9.3710, 80.4020),
];

// ============================================================================
// East, towards Mullaitivu
// ============================================================================

pub const EAST: &[Place] = &[
    Place::new("Puthukkudiyiruppu", 9.3130, 80.7120),
    Place::new("Mullaitivu Town", 9.2670, 80.8140),
];
