//! Ståhlberg Lielahti lunch menu adapter.
//!
//! The page builder wraps each day heading and its menu table in separate
//! module divs, so sibling walking never reaches the table. Instead the
//! scan runs over all elements in document order: after a day heading,
//! the next `table.ruokalista` holds that day's dishes in its first
//! column, unless another day heading shows up first.

use async_trait::async_trait;
use lazy_static::lazy_static;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};

use super::{fetch_text, Restaurant};
use crate::extract::element_text;
use crate::menu::DayMenu;
use crate::weekday::{is_day_header, normalize_day_name};

const NAME: &str = "Ståhlberg Lielahti";
const URL: &str = "https://stahlbergkahvilat.fi/stahlberg-lielahti/";

lazy_static! {
    static ref FIRST_COLUMN: Selector =
        Selector::parse("td.column-1").expect("valid first column selector");
}

pub struct StahlbergLielahti;

impl StahlbergLielahti {
    pub fn extract(doc: &Html) -> DayMenu {
        let mut menu = DayMenu::new();
        let elements: Vec<ElementRef> = doc
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .collect();

        for (position, element) in elements.iter().enumerate() {
            if !is_heading(element) {
                continue;
            }
            let Some(day) = normalize_day_name(&element_text(*element)) else {
                continue;
            };
            if let Some(table) = find_menu_table(&elements[position + 1..]) {
                menu.insert(day, table_items(table));
            }
        }

        menu
    }
}

fn is_heading(element: &ElementRef<'_>) -> bool {
    matches!(
        element.value().name(),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
    )
}

/// The first `table.ruokalista` after a day heading, giving up if the
/// next day heading comes first.
fn find_menu_table<'a>(following: &[ElementRef<'a>]) -> Option<ElementRef<'a>> {
    for element in following {
        if is_heading(element) && is_day_header(&element_text(*element)) {
            return None;
        }
        if element.value().name() == "table"
            && element.value().classes().any(|class| class == "ruokalista")
        {
            return Some(*element);
        }
    }
    None
}

fn table_items(table: ElementRef<'_>) -> Vec<String> {
    table
        .select(&FIRST_COLUMN)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

#[async_trait]
impl Restaurant for StahlbergLielahti {
    fn name(&self) -> &str {
        NAME
    }

    fn origin(&self) -> &str {
        URL
    }

    async fn scrape(&self, client: &Client) -> DayMenu {
        let Some(body) = fetch_text(client, NAME, URL).await else {
            return DayMenu::new();
        };
        Self::extract(&Html::parse_document(&body))
    }
}
