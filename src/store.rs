//! REST adapter for the dashboard's hosted Postgres tables.
//!
//! Talks to a PostgREST-style endpoint (`/rest/v1/<table>`) with an API key.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::parse_var;
use crate::error::{ConfigError, StoreError};
use crate::model::{CustomerRow, Order, RouteRow};
use crate::traits::RouteStore;

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:54321".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

impl StoreConfig {
    /// Reads `STORE_URL`, `STORE_API_KEY` and `STORE_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            base_url: lookup("STORE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            api_key: lookup("STORE_API_KEY").unwrap_or(defaults.api_key),
            timeout_secs: parse_var(&lookup, "STORE_TIMEOUT_SECS")?
                .unwrap_or(defaults.timeout_secs),
        })
    }
}

#[derive(Debug, Clone)]
pub struct RestStore {
    config: StoreConfig,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Serialize)]
struct RoutePatch<'a> {
    route: &'a str,
}

impl RestStore {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn table_url(&self, table: &str, query: &str) -> String {
        format!("{}/rest/v1/{}?{}", self.config.base_url, table, query)
    }

    fn authorized(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    fn select<T: DeserializeOwned>(&self, table: &str, query: &str) -> Result<Vec<T>, StoreError> {
        let url = self.table_url(table, query);
        debug!(%url, "store select");

        let response = self.authorized(self.client.get(url)).send()?;
        let rows = check_status(response)?.json::<Vec<T>>()?;
        Ok(rows)
    }
}

fn check_status(
    response: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(StoreError::Status {
        status: status.as_u16(),
        body,
    })
}

impl RouteStore for RestStore {
    fn customers(&self) -> Result<Vec<CustomerRow>, StoreError> {
        self.select("customers", "select=id,name,location,route&order=name")
    }

    fn route_names(&self) -> Result<Vec<String>, StoreError> {
        let rows: Vec<RouteRow> = self.select("routes", "select=name&order=name")?;
        Ok(rows.into_iter().map(|row| row.name).collect())
    }

    fn orders(&self) -> Result<Vec<Order>, StoreError> {
        self.select("orders", "select=id,customer_id,total_amount,paid_amount,status")
    }

    fn update_customer_route(&self, customer_id: &str, route_name: &str) -> Result<(), StoreError> {
        let url = format!("{}/rest/v1/customers", self.config.base_url);
        debug!(%url, customer_id, route_name, "store update customer route");

        let response = self
            .authorized(self.client.patch(url))
            .query(&[("id", format!("eq.{}", customer_id))])
            .header("Prefer", "return=representation")
            .json(&RoutePatch { route: route_name })
            .send()?;
        let updated = check_status(response)?.json::<Vec<CustomerRow>>()?;

        if updated.is_empty() {
            return Err(StoreError::NotFound(customer_id.to_string()));
        }
        Ok(())
    }
}
