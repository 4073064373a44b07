//! # Run Orchestrator Module
//!
//! Drives one batch run: scrape every configured restaurant in order,
//! render the outcomes into one combined message, split it under the
//! Telegram length limit and post the chunks. Sources fail independently;
//! the run only counts as failed when every source came back empty or
//! the send itself failed.

use chrono::{Datelike, Local, NaiveDate};
use log::{info, warn};
use reqwest::Client;

use crate::format::{render_block, render_combined};
use crate::menu::MenuOutcome;
use crate::restaurants::Restaurant;
use crate::split::{split_message, TELEGRAM_MESSAGE_LIMIT};
use crate::telegram::MenuPoster;

/// Outcome of a whole run, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every source produced a menu and the post went through.
    Complete,
    /// Some sources failed but the post went through.
    Partial,
    /// No source produced a menu; nothing was posted.
    AllSourcesFailed,
    /// At least one chunk failed to send.
    SendFailed,
}

impl RunStatus {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunStatus::Complete | RunStatus::Partial => 0,
            RunStatus::SendFailed => 1,
            RunStatus::AllSourcesFailed => 2,
        }
    }
}

/// Scrape all sources sequentially, in declaration order.
pub async fn scrape_all(
    client: &Client,
    restaurants: &[Box<dyn Restaurant>],
) -> Vec<(String, MenuOutcome)> {
    let mut results = Vec::with_capacity(restaurants.len());

    for restaurant in restaurants {
        info!("Scraping menu from {}", restaurant.name());
        let menu = restaurant.scrape(client).await;
        let outcome = MenuOutcome::from(menu);
        match &outcome {
            MenuOutcome::Menu(menu) => {
                info!(
                    "Successfully scraped menu from {} ({} days)",
                    restaurant.name(),
                    menu.len()
                );
            }
            MenuOutcome::Unavailable => {
                warn!("Failed to get menu from {}", restaurant.name());
            }
        }
        results.push((restaurant.name().to_string(), outcome));
    }

    results
}

/// Render scrape results into the combined outbound message.
pub fn compose_message(
    results: &[(String, MenuOutcome)],
    weekday_index: u32,
    date: NaiveDate,
) -> String {
    let blocks: Vec<String> = results
        .iter()
        .map(|(name, outcome)| render_block(name, outcome))
        .collect();
    render_combined(&blocks, weekday_index, date)
}

/// Run one full scrape-compose-post cycle.
pub async fn run(
    client: &Client,
    restaurants: &[Box<dyn Restaurant>],
    poster: &MenuPoster,
) -> RunStatus {
    let results = scrape_all(client, restaurants).await;

    let available = results
        .iter()
        .filter(|(_, outcome)| matches!(outcome, MenuOutcome::Menu(_)))
        .count();
    if available == 0 {
        warn!("No menus were successfully scraped");
        return RunStatus::AllSourcesFailed;
    }
    info!("Successfully scraped {}/{} menus", available, results.len());

    let today = Local::now().date_naive();
    let message = compose_message(&results, today.weekday().num_days_from_monday(), today);
    let chunks = split_message(&message, TELEGRAM_MESSAGE_LIMIT);
    info!("Composed message of {} chunk(s)", chunks.len());

    if !poster.post_all(&chunks).await {
        return RunStatus::SendFailed;
    }

    if available == results.len() {
        RunStatus::Complete
    } else {
        RunStatus::Partial
    }
}
