//! Turn-by-turn links for an optimized route.

use crate::coordinate::Coordinate;
use crate::sequencer::RoutePlan;

/// `<base>/dir/<lat>,<lng>/<lat>,<lng>/...` for the given waypoints, or
/// `None` when there is nowhere to go.
pub fn directions_url(base_url: &str, waypoints: &[Coordinate]) -> Option<String> {
    if waypoints.is_empty() {
        return None;
    }

    let path = waypoints
        .iter()
        .map(Coordinate::to_string)
        .collect::<Vec<_>>()
        .join("/");

    Some(format!("{}/dir/{}", base_url.trim_end_matches('/'), path))
}

impl RoutePlan {
    /// Directions from the depot through every geo-tagged stop and back.
    pub fn directions_url(&self, base_url: &str) -> Option<String> {
        directions_url(base_url, &self.waypoints())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Customer;
    use crate::sequencer::plan_route;

    #[test]
    fn test_url_lists_waypoints_in_order() {
        let url = directions_url(
            "https://www.google.com/maps/",
            &[Coordinate::new(9.384489, 80.408737), Coordinate::new(9.4, 80.42)],
        );
        assert_eq!(
            url.as_deref(),
            Some("https://www.google.com/maps/dir/9.384489,80.408737/9.400000,80.420000")
        );
    }

    #[test]
    fn test_no_waypoints_no_url() {
        assert_eq!(directions_url("https://www.google.com/maps", &[]), None);
    }

    #[test]
    fn test_plan_url_round_trips_depot() {
        let depot = Coordinate::new(0.0, 0.0);
        let customers = vec![
            Customer::new("b", "").at("GPS: 0, 2"),
            Customer::new("a", "").at("GPS: 0, 1"),
        ];

        let url = plan_route("North", &customers, depot).directions_url("https://maps.example.com");
        assert_eq!(
            url.as_deref(),
            Some(concat!(
                "https://maps.example.com/dir/0.000000,0.000000/0.000000,1.000000",
                "/0.000000,2.000000/0.000000,0.000000"
            ))
        );
    }
}
