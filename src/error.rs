//! Error types for the I/O edges of the planner.
//!
//! The routing computations themselves are total; only the store and the
//! environment can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("store returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("not found in store: {0}")]
    NotFound(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("unknown route: {0}")]
    UnknownRoute(String),
    #[error("unknown customer: {0}")]
    UnknownCustomer(String),
    #[error("customer {customer_id} is already on route {route}")]
    AlreadyAssigned { customer_id: String, route: String },
    #[error("no route suggestion for customer {0}")]
    NoSuggestion(String),
}
