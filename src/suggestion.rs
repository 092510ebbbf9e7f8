//! Route suggestions for unassigned customers.
//!
//! A route is represented by the centroid of its geo-tagged members; an
//! unassigned customer is pointed at the route whose centroid is closest.
//! Suggestions are advisory. Nothing here writes to the store.

use rayon::prelude::*;
use tracing::debug;

use crate::coordinate::Coordinate;
use crate::haversine::{centroid, distance_km};
use crate::model::{Customer, UNASSIGNED};

/// A proposed route for one unassigned customer.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSuggestion {
    pub customer_id: String,
    pub route: String,
    /// Distance from the customer to the route's centroid.
    pub distance_km: f64,
}

/// Closest route (by member centroid) for an unassigned, geo-tagged
/// customer, with the distance to that centroid.
///
/// Ties go to the route listed first in `route_names`.
pub fn nearest_route(
    customer: &Customer,
    all_customers: &[Customer],
    route_names: &[String],
) -> Option<(String, f64)> {
    if !customer.route.is_unassigned() {
        return None;
    }
    let origin = customer.coordinate()?;

    let mut best: Option<(&str, f64)> = None;
    for route_name in route_names {
        if route_name == UNASSIGNED || customer.route.is(route_name) {
            continue;
        }

        let Some(center) = route_centroid(route_name, customer, all_customers) else {
            continue;
        };

        let distance = distance_km(origin, center);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((route_name.as_str(), distance));
        }
    }

    best.map(|(name, distance)| (name.to_string(), distance))
}

/// Suggested route name for `customer`, or `None` when the customer already
/// has a route, has no coordinate, or no other route has geo-tagged members.
pub fn suggest_route(
    customer: &Customer,
    all_customers: &[Customer],
    route_names: &[String],
) -> Option<String> {
    nearest_route(customer, all_customers, route_names).map(|(name, _)| name)
}

/// Suggestions for every unassigned customer that has one, in input order.
pub fn suggest_for_unassigned(
    all_customers: &[Customer],
    route_names: &[String],
) -> Vec<RouteSuggestion> {
    let suggestions: Vec<RouteSuggestion> = all_customers
        .par_iter()
        .filter(|customer| customer.route.is_unassigned())
        .filter_map(|customer| {
            nearest_route(customer, all_customers, route_names).map(|(route, distance_km)| {
                RouteSuggestion {
                    customer_id: customer.id.clone(),
                    route,
                    distance_km,
                }
            })
        })
        .collect();

    debug!(suggestions = suggestions.len(), "computed route suggestions");
    suggestions
}

fn route_centroid(
    route_name: &str,
    customer: &Customer,
    all_customers: &[Customer],
) -> Option<Coordinate> {
    centroid(
        all_customers
            .iter()
            .filter(|member| member.id != customer.id && member.route.is(route_name))
            .filter_map(Customer::coordinate),
    )
}
