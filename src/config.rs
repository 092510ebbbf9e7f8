//! Planner configuration.
//!
//! Defaults cover a local setup; every field can be overridden from the
//! environment (a `.env` file is honored).

use std::str::FromStr;

use crate::coordinate::Coordinate;
use crate::error::ConfigError;

/// Distribution center in Kilinochchi.
pub const DEFAULT_DEPOT: Coordinate = Coordinate::new(9.384489, 80.408737);

pub const DEFAULT_DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps";

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Start and end point of every delivery route.
    pub depot: Coordinate,
    /// Mapping service that turn-by-turn links are built against.
    pub directions_base_url: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            depot: DEFAULT_DEPOT,
            directions_base_url: DEFAULT_DIRECTIONS_BASE_URL.to_string(),
        }
    }
}

impl PlannerConfig {
    /// Reads `DEPOT_LAT`, `DEPOT_LNG` and `DIRECTIONS_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let lat = parse_var(&lookup, "DEPOT_LAT")?.unwrap_or(defaults.depot.lat);
        let lng = parse_var(&lookup, "DEPOT_LNG")?.unwrap_or(defaults.depot.lng);
        let depot = Coordinate::new(lat, lng);
        if !depot.is_valid() {
            return Err(ConfigError::Invalid {
                key: "DEPOT_LAT/DEPOT_LNG",
                value: depot.to_string(),
            });
        }

        let directions_base_url = lookup("DIRECTIONS_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.directions_base_url);

        Ok(Self {
            depot,
            directions_base_url,
        })
    }
}

/// Parses an optional variable; present but unparsable is an error.
pub(crate) fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
