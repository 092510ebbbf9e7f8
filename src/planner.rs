//! Route planner facade over a [`RouteStore`].
//!
//! Every call reads a fresh snapshot from the store; nothing is cached
//! between calls. The only write is a customer's route column.

use tracing::{debug, info};

use crate::aggregation::{
    RouteSummary, customer_balances, group_by_route, route_members, summarize,
};
use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::model::{Customer, RouteAssignment, UNASSIGNED, ingest_customers};
use crate::sequencer::{RoutePlan, plan_route};
use crate::suggestion::{RouteSuggestion, nearest_route, suggest_for_unassigned};
use crate::traits::RouteStore;

/// An optimized route and its turn-by-turn link.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedRoute {
    pub plan: RoutePlan,
    pub directions_url: Option<String>,
}

pub struct RoutePlanner<S: RouteStore> {
    store: S,
    config: PlannerConfig,
}

impl<S: RouteStore> RoutePlanner<S> {
    pub fn new(store: S, config: PlannerConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Nearest-neighbor visiting order for `route_name`, from and back to the
    /// configured depot.
    ///
    /// The name must be in the routes table or carried by at least one
    /// customer, matching the groups `route_summaries` reports.
    pub fn optimize_route(&self, route_name: &str) -> Result<OptimizedRoute, PlannerError> {
        let route_names = self.store.route_names()?;
        let customers = self.customers()?;
        let members = route_members(&customers, route_name);

        let listed = route_names.iter().any(|name| name == route_name);
        if route_name == UNASSIGNED || (!listed && members.is_empty()) {
            return Err(PlannerError::UnknownRoute(route_name.to_string()));
        }

        let plan = plan_route(route_name, &members, self.config.depot);
        let directions_url = plan.directions_url(&self.config.directions_base_url);

        info!(
            route = route_name,
            stops = plan.sequence.len(),
            total_distance_km = plan.total_distance_km,
            "optimized route"
        );

        Ok(OptimizedRoute { plan, directions_url })
    }

    /// Suggested routes for all unassigned customers.
    pub fn suggestions(&self) -> Result<Vec<RouteSuggestion>, PlannerError> {
        let route_names = self.store.route_names()?;
        let customers = self.customers()?;
        Ok(suggest_for_unassigned(&customers, &route_names))
    }

    /// Recomputes the suggestion for one customer against current data and
    /// writes it back. Returns the route applied.
    pub fn apply_suggestion(&self, customer_id: &str) -> Result<String, PlannerError> {
        let route_names = self.store.route_names()?;
        let customers = self.customers()?;
        let customer = find_customer(&customers, customer_id)?;

        if let RouteAssignment::Route(route) = &customer.route {
            return Err(PlannerError::AlreadyAssigned {
                customer_id: customer_id.to_string(),
                route: route.clone(),
            });
        }

        let (route, distance_km) = nearest_route(customer, &customers, &route_names)
            .ok_or_else(|| PlannerError::NoSuggestion(customer_id.to_string()))?;

        self.store.update_customer_route(customer_id, &route)?;
        info!(customer_id, route = %route, distance_km, "applied route suggestion");
        Ok(route)
    }

    /// Manually moves a customer to `route_name`, or clears the route with
    /// `"Unassigned"`.
    pub fn assign_route(&self, customer_id: &str, route_name: &str) -> Result<(), PlannerError> {
        let route_names = self.store.route_names()?;
        if route_name != UNASSIGNED && !route_names.iter().any(|name| name == route_name) {
            return Err(PlannerError::UnknownRoute(route_name.to_string()));
        }

        let customers = self.customers()?;
        find_customer(&customers, customer_id)?;

        self.store.update_customer_route(customer_id, route_name)?;
        info!(customer_id, route = route_name, "assigned route");
        Ok(())
    }

    /// Per-route customer counts and balances, unassigned last.
    pub fn route_summaries(&self) -> Result<Vec<RouteSummary>, PlannerError> {
        let route_names = self.store.route_names()?;
        let customers = self.customers()?;
        let orders = self.store.orders()?;

        let groups = group_by_route(&customers, &route_names);
        let summaries = summarize(&groups, &customer_balances(&orders));
        debug!(routes = summaries.len(), orders = orders.len(), "summarized routes");
        Ok(summaries)
    }

    fn customers(&self) -> Result<Vec<Customer>, PlannerError> {
        Ok(ingest_customers(self.store.customers()?))
    }
}

fn find_customer<'a>(
    customers: &'a [Customer],
    customer_id: &str,
) -> Result<&'a Customer, PlannerError> {
    customers
        .iter()
        .find(|customer| customer.id == customer_id)
        .ok_or_else(|| PlannerError::UnknownCustomer(customer_id.to_string()))
}
