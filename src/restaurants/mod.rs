//! # Restaurant Adapters Module
//!
//! One adapter per restaurant source. Each adapter knows its identity and
//! origin URL and how to turn a fetched page or feed into a [`DayMenu`].
//! Failures never cross this boundary: a fetch or parse problem is logged
//! and comes back as an empty menu, which the orchestrator records as an
//! unavailable source.

use async_trait::async_trait;
use log::{error, warn};
use reqwest::Client;
use std::time::Duration;

use crate::menu::DayMenu;

pub mod kahvila_epila;
pub mod kontukeittio;
pub mod nokian_kartano;
pub mod pizza_buffa;
pub mod stahlberg;

pub use kahvila_epila::KahvilaEpila;
pub use kontukeittio::KontukeittioNokia;
pub use nokian_kartano::NokianKartano;
pub use pizza_buffa::PizzaBuffa;
pub use stahlberg::StahlbergLielahti;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const FETCH_TIMEOUT_SECS: u64 = 30;

/// One scrapeable restaurant source.
#[async_trait]
pub trait Restaurant: Send + Sync {
    /// Human-readable restaurant name, used in the rendered message.
    fn name(&self) -> &str;

    /// Origin locator of the menu (page URL or feed endpoint).
    fn origin(&self) -> &str;

    /// Fetch and extract this restaurant's weekly menu. An empty menu
    /// means the source was unreachable or unrecognizable.
    async fn scrape(&self, client: &Client) -> DayMenu;
}

/// Shared HTTP client: browser User-Agent, hard fetch timeout so one slow
/// source cannot stall the run.
pub fn http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
}

/// Fetch a page body as text. Any transport or status failure is logged
/// under the source's name and yields `None`.
pub async fn fetch_text(client: &Client, name: &str, url: &str) -> Option<String> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Failed to fetch {} page: {}", name, e);
            return None;
        }
    };
    let response = match response.error_for_status() {
        Ok(response) => response,
        Err(e) => {
            error!("Non-success status from {}: {}", name, e);
            return None;
        }
    };
    match response.text().await {
        Ok(body) => Some(body),
        Err(e) => {
            error!("Failed to read {} response body: {}", name, e);
            None
        }
    }
}

/// Fetch a JSON feed into a dynamic tree. Absent fields downstream are
/// handled as empty, so this only fails on transport or syntax errors.
pub async fn fetch_json(
    client: &Client,
    name: &str,
    url: &str,
    timeout: Duration,
) -> Option<serde_json::Value> {
    let response = match client.get(url).timeout(timeout).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Failed to fetch {} JSON: {}", name, e);
            return None;
        }
    };
    let response = match response.error_for_status() {
        Ok(response) => response,
        Err(e) => {
            error!("Non-success status from {}: {}", name, e);
            return None;
        }
    };
    match response.json().await {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Unparseable JSON from {}: {}", name, e);
            None
        }
    }
}

/// The configured sources, in the order they appear in the post.
pub fn default_restaurants() -> Vec<Box<dyn Restaurant>> {
    vec![
        Box::new(KahvilaEpila),
        Box::new(KontukeittioNokia),
        Box::new(NokianKartano),
        Box::new(PizzaBuffa),
        Box::new(StahlbergLielahti),
    ]
}
