//! Seams to the surrounding application.
//!
//! The planner reads customers, routes and orders from whatever backs the
//! dashboard and writes back a single field: a customer's route.

use crate::error::StoreError;
use crate::model::{CustomerRow, Order};

/// Read access to the dashboard's tables plus the one write the planner
/// makes.
pub trait RouteStore {
    fn customers(&self) -> Result<Vec<CustomerRow>, StoreError>;

    /// Known route names in display order.
    fn route_names(&self) -> Result<Vec<String>, StoreError>;

    fn orders(&self) -> Result<Vec<Order>, StoreError>;

    /// Sets the customer's route column to `route_name` (`"Unassigned"`
    /// clears it).
    fn update_customer_route(&self, customer_id: &str, route_name: &str) -> Result<(), StoreError>;
}
