//! Nearest-neighbor visiting order for a single route.
//!
//! Greedy tour construction from the depot: always drive to the closest
//! stop not yet visited. Not optimal, but O(n²) on routes of a few dozen
//! customers and fully deterministic.

use tracing::debug;

use crate::coordinate::Coordinate;
use crate::haversine::distance_km;
use crate::model::Customer;

/// Orders `customers` for delivery starting from `depot`.
///
/// Geo-tagged customers come first in nearest-neighbor order; customers
/// without a coordinate follow in their original order. Equidistant
/// candidates resolve to the one earliest in the input. With no geo-tagged
/// customers the input is returned unchanged.
pub fn optimize_sequence(customers: &[Customer], depot: Coordinate) -> Vec<Customer> {
    let (mut remaining, untagged): (Vec<(&Customer, Coordinate)>, Vec<&Customer>) =
        partition_by_coordinate(customers);

    if remaining.is_empty() {
        return customers.to_vec();
    }

    let mut sequence = Vec::with_capacity(customers.len());
    let mut current = depot;

    while !remaining.is_empty() {
        let mut best_index = 0;
        let mut best_distance = f64::INFINITY;

        for (index, (_, coordinate)) in remaining.iter().enumerate() {
            let distance = distance_km(current, *coordinate);
            if distance < best_distance {
                best_distance = distance;
                best_index = index;
            }
        }

        // `remove` keeps the scan order of the rest stable for tie-breaking.
        let (customer, coordinate) = remaining.remove(best_index);
        sequence.push(customer.clone());
        current = coordinate;
    }

    sequence.extend(untagged.into_iter().cloned());
    sequence
}

/// Round-trip distance in km: depot, each geo-tagged stop in order, depot.
///
/// Stops without a coordinate are skipped and do not move the current
/// position. A sequence with no geo-tagged stops has zero distance.
pub fn total_route_distance_km(sequence: &[Customer], depot: Coordinate) -> f64 {
    let mut total = 0.0;
    let mut current = depot;
    let mut visited_any = false;

    for coordinate in sequence.iter().filter_map(Customer::coordinate) {
        total += distance_km(current, coordinate);
        current = coordinate;
        visited_any = true;
    }

    if visited_any {
        total += distance_km(current, depot);
    }

    total
}

/// Result of optimizing one route.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    pub route: String,
    pub depot: Coordinate,
    pub sequence: Vec<Customer>,
    pub total_distance_km: f64,
    /// Stops appended at the end because they have no coordinate.
    pub unlocatable: usize,
}

impl RoutePlan {
    /// Depot, every geo-tagged stop in visiting order, then depot again.
    /// Empty when the route has nothing to drive to.
    pub fn waypoints(&self) -> Vec<Coordinate> {
        let stops: Vec<Coordinate> = self
            .sequence
            .iter()
            .filter_map(Customer::coordinate)
            .collect();
        if stops.is_empty() {
            return Vec::new();
        }

        let mut waypoints = Vec::with_capacity(stops.len() + 2);
        waypoints.push(self.depot);
        waypoints.extend(stops);
        waypoints.push(self.depot);
        waypoints
    }

    pub fn has_geo_tagged_stops(&self) -> bool {
        self.unlocatable < self.sequence.len()
    }
}

/// Sequences `customers` and measures the resulting round trip.
pub fn plan_route(route: &str, customers: &[Customer], depot: Coordinate) -> RoutePlan {
    let sequence = optimize_sequence(customers, depot);
    let total_distance_km = total_route_distance_km(&sequence, depot);
    let unlocatable = sequence
        .iter()
        .filter(|customer| customer.coordinate().is_none())
        .count();

    debug!(
        route,
        stops = sequence.len(),
        unlocatable,
        total_distance_km,
        "sequenced route"
    );

    RoutePlan {
        route: route.to_string(),
        depot,
        sequence,
        total_distance_km,
        unlocatable,
    }
}

fn partition_by_coordinate(
    customers: &[Customer],
) -> (Vec<(&Customer, Coordinate)>, Vec<&Customer>) {
    let mut tagged = Vec::new();
    let mut untagged = Vec::new();

    for customer in customers {
        match customer.coordinate() {
            Some(coordinate) => tagged.push((customer, coordinate)),
            None => untagged.push(customer),
        }
    }

    (tagged, untagged)
}
