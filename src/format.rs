//! # Message Formatting Module
//!
//! Renders scrape outcomes into the outbound Telegram message: one block
//! per restaurant, a header naming the day being highlighted, and a fixed
//! footer. Output is Telegram HTML, so every dynamic string goes through
//! [`escape`] before interpolation.

use chrono::NaiveDate;

use crate::menu::MenuOutcome;
use crate::weekday::target_day_for;

const TITLE: &str = "Päivän lounaslistat";
const FOOTER: &str = "Hyvää ruokahalua!";
const FAILURE_MARKER: &str = "❌";

/// Escape text for Telegram's HTML parse mode.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render one restaurant's block.
///
/// An unavailable source becomes a single marked failure line. A menu
/// renders its source header, then each stored day in insertion order
/// with bulleted items. Days the source did not report are simply
/// omitted, with no placeholder line.
pub fn render_block(source_name: &str, outcome: &MenuOutcome) -> String {
    let menu = match outcome {
        MenuOutcome::Unavailable => {
            return format!(
                "{} {}: Unable to fetch menu",
                FAILURE_MARKER,
                escape(source_name)
            );
        }
        MenuOutcome::Menu(menu) => menu,
    };

    let mut block = format!("🍽️ <b>{}</b>\n", escape(source_name));
    for (day, items) in menu.iter() {
        block.push_str(&format!("\n<b>{}:</b>\n", day.name()));
        for item in items {
            block.push_str(&format!("• {}\n", escape(item)));
        }
    }
    block.trim_end().to_string()
}

/// Render the whole run into one logical message: header with the target
/// day and date, blocks joined by a blank line, fixed footer.
pub fn render_combined(blocks: &[String], weekday_index: u32, date: NaiveDate) -> String {
    let target = target_day_for(weekday_index);
    let mut message = format!(
        "<b>{}</b>\n{} {}\n\n",
        TITLE,
        target.name(),
        date.format("%-d.%-m.%Y")
    );
    message.push_str(&blocks.join("\n\n"));
    message.push_str(&format!("\n\n{}", FOOTER));
    message
}
