//! Domain records and the ingestion boundary from raw store rows.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::coordinate::{Coordinate, Location};

/// Route value the store uses for customers without a route.
pub const UNASSIGNED: &str = "Unassigned";

/// Which delivery route a customer belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouteAssignment {
    Unassigned,
    Route(String),
}

impl RouteAssignment {
    /// Missing, blank and `"Unassigned"` values all mean no route. Any other
    /// value is kept verbatim so it compares equal to the routes table.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None | Some(UNASSIGNED) => RouteAssignment::Unassigned,
            Some(name) if name.trim().is_empty() => RouteAssignment::Unassigned,
            Some(name) => RouteAssignment::Route(name.to_string()),
        }
    }

    /// The value written back to the store's route column.
    pub fn as_str(&self) -> &str {
        match self {
            RouteAssignment::Unassigned => UNASSIGNED,
            RouteAssignment::Route(name) => name,
        }
    }

    pub fn is_unassigned(&self) -> bool {
        matches!(self, RouteAssignment::Unassigned)
    }

    pub fn is(&self, route_name: &str) -> bool {
        self.as_str() == route_name
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub location: Location,
    pub route: RouteAssignment,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: Location::default(),
            route: RouteAssignment::Unassigned,
        }
    }

    pub fn at(mut self, location: &str) -> Self {
        self.location = Location::parse(location);
        self
    }

    pub fn on_route(mut self, route: &str) -> Self {
        self.route = RouteAssignment::from_raw(Some(route));
        self
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        self.location.coordinate
    }
}

/// Customer row as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRow {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub route: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id: row.id,
            name: row.name.unwrap_or_default(),
            location: row.location.as_deref().map(Location::parse).unwrap_or_default(),
            route: RouteAssignment::from_raw(row.route.as_deref()),
        }
    }
}

/// Converts store rows into customers, logging how many have no usable
/// GPS tag and will be left out of distance calculations.
pub fn ingest_customers(rows: Vec<CustomerRow>) -> Vec<Customer> {
    let customers: Vec<Customer> = rows.into_iter().map(Customer::from).collect();

    let unlocatable = customers
        .iter()
        .filter(|customer| !customer.location.is_geo_tagged())
        .count();
    if unlocatable > 0 {
        warn!(
            unlocatable,
            total = customers.len(),
            "customers without a GPS tag are excluded from distance calculations"
        );
    }

    customers
}

/// Only `Cancelled` is excluded from balances; statuses this crate does not
/// know about land in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Delivered,
    Cancelled,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub paid_amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: OrderStatus,
}

/// Nullable columns come back as JSON `null`; read them as the default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRow {
    pub name: String,
}
