//! route-planner
//!
//! Delivery route sequencing and route suggestions for customers whose
//! locations carry an embedded GPS tag.

pub mod aggregation;
pub mod config;
pub mod coordinate;
pub mod directions;
pub mod error;
pub mod haversine;
pub mod model;
pub mod planner;
pub mod sequencer;
pub mod store;
pub mod suggestion;
pub mod traits;

pub use coordinate::{Coordinate, Location, parse_coordinate};
pub use haversine::distance_km;
pub use model::Customer;
pub use sequencer::{optimize_sequence, total_route_distance_km};
pub use suggestion::suggest_route;
