//! Kontukeittiö Nokia lunch menu adapter.
//!
//! The only JSON source: the Luncher week feed. The payload is treated as
//! a dynamic tree with optional-field access throughout, so a missing or
//! reshaped field degrades to an empty menu rather than an error. Items
//! are enriched with allergen codes and a price suffix when the feed
//! carries them.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use log::warn;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::{fetch_json, Restaurant};
use crate::menu::DayMenu;
use crate::weekday::{normalize_day_name, Weekday};

const NAME: &str = "Kontukeittiö Nokia";
const URL: &str = "https://europe-west1-luncher-7cf76.cloudfunctions.net/api/v1/week/\
                   1baa89be-11dc-4447-abb3-bbaef16cc6d1/active?language=fi";
const FEED_TIMEOUT_SECS: u64 = 10;

pub struct KontukeittioNokia;

impl KontukeittioNokia {
    /// Extraction over an already-fetched feed payload.
    pub fn extract(payload: &Value) -> DayMenu {
        let mut menu = DayMenu::new();

        if payload.get("success").and_then(Value::as_bool) != Some(true) {
            warn!("Unexpected JSON structure from {}", NAME);
            return menu;
        }
        let Some(days) = payload
            .pointer("/data/week/days")
            .and_then(Value::as_array)
        else {
            warn!("Unexpected JSON structure from {}", NAME);
            return menu;
        };

        for day in days {
            if is_hidden_or_closed(day) {
                continue;
            }
            let Some(weekday) = day_weekday(day) else {
                continue;
            };
            let items: Vec<String> = day
                .get("menus")
                .and_then(Value::as_array)
                .map(|menus| menus.iter().filter_map(render_item).collect())
                .unwrap_or_default();
            menu.insert(weekday, items);
        }

        menu
    }
}

fn is_hidden_or_closed(day: &Value) -> bool {
    day.get("isHidden").and_then(Value::as_bool).unwrap_or(false)
        || day.get("isClosed").and_then(Value::as_bool).unwrap_or(false)
}

/// Resolve a feed day to a lunch weekday: the localized day name when the
/// feed carries one, otherwise the entry's calendar date. Weekend dates
/// are discarded either way.
fn day_weekday(day: &Value) -> Option<Weekday> {
    if let Some(name) = day.pointer("/dayName/fi").and_then(Value::as_str) {
        if let Some(weekday) = normalize_day_name(name) {
            return Some(weekday);
        }
    }
    let date = day.get("date").and_then(Value::as_str)?;
    let parsed = parse_feed_date(date)?;
    Weekday::from_index(parsed.weekday().num_days_from_monday())
}

fn parse_feed_date(date: &str) -> Option<NaiveDate> {
    // ISO date, possibly with a trailing time component.
    let head = date.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Render one feed item as `title (CODES) PRICE€`. Allergen codes and the
/// price suffix are appended only when present, in that fixed order.
fn render_item(item: &Value) -> Option<String> {
    let title = item.pointer("/name/fi").and_then(Value::as_str)?.trim();
    if title.is_empty() {
        return None;
    }
    let mut rendered = title.to_string();

    let codes = item
        .get("diets")
        .or_else(|| item.get("allergens"))
        .and_then(Value::as_array)
        .map(|codes| {
            codes
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();
    if !codes.is_empty() {
        rendered.push_str(&format!(" ({})", codes));
    }

    if let Some(price) = item.get("price") {
        if let Some(price) = price.as_f64() {
            rendered.push_str(&format!(" {:.2}€", price));
        } else if let Some(price) = price.as_str() {
            if !price.trim().is_empty() {
                rendered.push_str(&format!(" {}€", price.trim().trim_end_matches('€').trim()));
            }
        }
    }

    Some(rendered)
}

#[async_trait]
impl Restaurant for KontukeittioNokia {
    fn name(&self) -> &str {
        NAME
    }

    fn origin(&self) -> &str {
        URL
    }

    async fn scrape(&self, client: &Client) -> DayMenu {
        let Some(payload) =
            fetch_json(client, NAME, URL, Duration::from_secs(FEED_TIMEOUT_SECS)).await
        else {
            return DayMenu::new();
        };
        Self::extract(&payload)
    }
}
