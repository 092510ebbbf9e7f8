//! Test fixtures for route-planner.
//!
//! Provides:
//! - Kilinochchi-area locations
//! - An in-memory `RouteStore` that records route writes

#![allow(dead_code)]

pub mod kilinochchi_locations;

use std::cell::RefCell;

use route_planner::error::StoreError;
use route_planner::model::{CustomerRow, Order, OrderStatus};
use route_planner::traits::RouteStore;

pub use kilinochchi_locations::*;

pub fn row(id: &str, location: Option<String>, route: Option<&str>) -> CustomerRow {
    CustomerRow {
        id: id.to_string(),
        name: Some(format!("Customer {}", id)),
        location,
        route: route.map(str::to_string),
    }
}

pub fn placed(id: &str, place: &Place, route: Option<&str>) -> CustomerRow {
    row(id, Some(place.location_text()), route)
}

pub fn order(id: &str, customer_id: &str, total: f64, paid: f64, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        customer_id: customer_id.to_string(),
        total_amount: total,
        paid_amount: paid,
        status,
    }
}

/// In-memory store. Route writes are applied to the customer rows and
/// recorded in `updates`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub customers: RefCell<Vec<CustomerRow>>,
    pub routes: Vec<String>,
    pub orders: Vec<Order>,
    pub updates: RefCell<Vec<(String, String)>>,
}

impl MemoryStore {
    pub fn new(customers: Vec<CustomerRow>, routes: &[&str]) -> Self {
        Self {
            customers: RefCell::new(customers),
            routes: routes.iter().map(|name| name.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }

    pub fn route_of(&self, customer_id: &str) -> Option<String> {
        self.customers
            .borrow()
            .iter()
            .find(|row| row.id == customer_id)
            .and_then(|row| row.route.clone())
    }
}

impl RouteStore for MemoryStore {
    fn customers(&self) -> Result<Vec<CustomerRow>, StoreError> {
        Ok(self.customers.borrow().clone())
    }

    fn route_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.routes.clone())
    }

    fn orders(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.orders.clone())
    }

    fn update_customer_route(&self, customer_id: &str, route_name: &str) -> Result<(), StoreError> {
        let mut customers = self.customers.borrow_mut();
        let row = customers
            .iter_mut()
            .find(|row| row.id == customer_id)
            .ok_or_else(|| StoreError::NotFound(customer_id.to_string()))?;

        row.route = Some(route_name.to_string());
        self.updates
            .borrow_mut()
            .push((customer_id.to_string(), route_name.to_string()));
        Ok(())
    }
}
