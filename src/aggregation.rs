//! Customer grouping by route and balances folded from orders.

use std::collections::HashMap;

use crate::model::{Customer, Order, OrderStatus, RouteAssignment, UNASSIGNED};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerBalance {
    pub customer_id: String,
    pub order_count: usize,
    /// Sum of amounts actually paid.
    pub total_spent: f64,
    /// Sum of unpaid remainders. Overpayment on one order does not offset
    /// another.
    pub outstanding: f64,
}

/// Folds orders into one balance per customer id. Cancelled orders are
/// ignored.
pub fn customer_balances(orders: &[Order]) -> HashMap<String, CustomerBalance> {
    let mut balances: HashMap<String, CustomerBalance> = HashMap::new();

    for order in orders.iter().filter(|order| order.status != OrderStatus::Cancelled) {
        let balance = balances
            .entry(order.customer_id.clone())
            .or_insert_with(|| CustomerBalance {
                customer_id: order.customer_id.clone(),
                ..CustomerBalance::default()
            });

        balance.order_count += 1;
        balance.total_spent += order.paid_amount;
        balance.outstanding += (order.total_amount - order.paid_amount).max(0.0);
    }

    balances
}

/// Customers belonging to one route (or to no route).
#[derive(Debug, Clone, PartialEq)]
pub struct RouteGroup {
    pub route: RouteAssignment,
    pub customers: Vec<Customer>,
}

/// Groups customers by route.
///
/// Known routes come first in `route_names` order, including routes with no
/// customers. Route names found on customers but missing from `route_names`
/// follow in first-seen order. The unassigned group is always last.
pub fn group_by_route(customers: &[Customer], route_names: &[String]) -> Vec<RouteGroup> {
    let mut groups: Vec<RouteGroup> = route_names
        .iter()
        .filter(|name| name.as_str() != UNASSIGNED)
        .map(|name| RouteGroup {
            route: RouteAssignment::Route(name.clone()),
            customers: Vec::new(),
        })
        .collect();
    let mut unassigned = Vec::new();

    for customer in customers {
        if customer.route.is_unassigned() {
            unassigned.push(customer.clone());
            continue;
        }

        match groups.iter_mut().find(|group| group.route == customer.route) {
            Some(group) => group.customers.push(customer.clone()),
            None => groups.push(RouteGroup {
                route: customer.route.clone(),
                customers: vec![customer.clone()],
            }),
        }
    }

    groups.push(RouteGroup {
        route: RouteAssignment::Unassigned,
        customers: unassigned,
    });
    groups
}

/// Splits customers into (assigned, unassigned), preserving order.
pub fn partition_assignment(customers: &[Customer]) -> (Vec<Customer>, Vec<Customer>) {
    customers
        .iter()
        .cloned()
        .partition(|customer| !customer.route.is_unassigned())
}

/// Members of `route_name`, in store order.
pub fn route_members(customers: &[Customer], route_name: &str) -> Vec<Customer> {
    customers
        .iter()
        .filter(|customer| !customer.route.is_unassigned() && customer.route.is(route_name))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub route: RouteAssignment,
    pub customer_count: usize,
    pub geo_tagged_count: usize,
    pub order_count: usize,
    pub total_spent: f64,
    pub outstanding: f64,
}

pub fn summarize(
    groups: &[RouteGroup],
    balances: &HashMap<String, CustomerBalance>,
) -> Vec<RouteSummary> {
    groups
        .iter()
        .map(|group| {
            let mut summary = RouteSummary {
                route: group.route.clone(),
                customer_count: group.customers.len(),
                geo_tagged_count: 0,
                order_count: 0,
                total_spent: 0.0,
                outstanding: 0.0,
            };

            for customer in &group.customers {
                if customer.location.is_geo_tagged() {
                    summary.geo_tagged_count += 1;
                }
                if let Some(balance) = balances.get(&customer.id) {
                    summary.order_count += balance.order_count;
                    summary.total_spent += balance.total_spent;
                    summary.outstanding += balance.outstanding;
                }
            }

            summary
        })
        .collect()
}
