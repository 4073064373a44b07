//! Pizza Buffa ABC Kolmenkulma lunch menu adapter.
//!
//! The Raflaamo page is the noisiest source: day headings like
//! "Tiistai 12.8." followed by free-running text mixing dishes, buffet
//! boilerplate and price tags. Dish candidates are mined with patterns,
//! boilerplate-stripped, fuzzy-deduplicated and capped per day.

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};

use super::{fetch_text, Restaurant};
use crate::extract::{
    dedup_items, element_text, flatten_text, is_fuzzy_duplicate, regex_fallback, strip_boilerplate,
};
use crate::menu::DayMenu;
use crate::weekday::{normalize_day_name, starts_with_day_token};

const NAME: &str = "Pizza Buffa ABC Kolmenkulma";
const URL: &str =
    "https://www.raflaamo.fi/fi/ravintola/nokia/pizza-buffa-abc-kolmenkulma-nokia/menu/lounas";

/// Cap on mined dishes per day; everything past it is low-confidence.
const MAX_ITEMS_PER_DAY: usize = 5;

const STOPLIST: [&str; 6] = [
    "pizzavalikoima",
    "salaatti- ja leipäpöytä",
    "ruokajuomat ja kahvi",
    "buffantai",
    "lasten",
    "€",
];

lazy_static! {
    static ref DAY_HEADING: Selector = Selector::parse("h3").expect("valid h3 selector");

    // Dish-like spans: a capitalized run ending in dietary codes, or a
    // plain capitalized run long enough to be a dish name.
    static ref CODED_DISH: Regex =
        Regex::new(r"([A-ZÄÖÅ][^€\n]*?\((?:[LMVEG,\s]+)\))").expect("valid coded dish pattern");
    static ref PLAIN_DISH: Regex =
        Regex::new(r"([A-ZÄÖÅ][a-zäöå\s-]{10,60})").expect("valid plain dish pattern");
}

pub struct PizzaBuffa;

impl PizzaBuffa {
    pub fn extract(doc: &Html) -> DayMenu {
        let menu = Self::extract_from_headings(doc);
        if !menu.is_empty() {
            return menu;
        }
        // Headings missing: capture day windows out of the whole text and
        // mine those instead.
        let fallback = regex_fallback(&flatten_text(doc), &STOPLIST);
        let mut menu = DayMenu::new();
        for (day, items) in fallback.iter() {
            let mined: Vec<String> = items
                .iter()
                .flat_map(|line| mine_dishes(line))
                .collect();
            menu.insert(day, dedup_items(mined, MAX_ITEMS_PER_DAY));
        }
        menu
    }

    fn extract_from_headings(doc: &Html) -> DayMenu {
        let mut menu = DayMenu::new();

        for heading in doc.select(&DAY_HEADING) {
            let heading_text = element_text(heading);
            // Weekend headings are skipped; normalize only yields Mon-Fri.
            let Some(day) = normalize_day_name(&heading_text) else {
                continue;
            };

            let mut candidates = Vec::new();
            for node in heading.next_siblings() {
                let Some(element) = ElementRef::wrap(node) else {
                    continue;
                };
                let text = element_text(element);
                if starts_with_day_token(&text) {
                    break;
                }
                candidates.extend(mine_dishes(&text));
            }
            menu.insert(day, dedup_items(candidates, MAX_ITEMS_PER_DAY));
        }

        menu
    }
}

/// Mine dish-like strings out of one text run, dropping boilerplate and
/// price fragments.
fn mine_dishes(text: &str) -> Vec<String> {
    let mut dishes: Vec<String> = Vec::new();

    let coded = CODED_DISH.find_iter(text).map(|m| m.as_str());
    let plain = PLAIN_DISH.find_iter(text).map(|m| m.as_str());

    for candidate in coded.chain(plain) {
        let mut candidate = candidate.split_whitespace().collect::<Vec<_>>().join(" ");
        // The page labels each day's list with a leading "Lounas:".
        if candidate.to_lowercase().starts_with("lounas:") {
            candidate = candidate["lounas:".len()..].trim().to_string();
        }
        if candidate.chars().count() <= 8 || matches_stoplist(&candidate) {
            continue;
        }
        let Some(cleaned) = strip_boilerplate(&candidate) else {
            continue;
        };
        if !dishes.iter().any(|kept| is_fuzzy_duplicate(kept, &cleaned)) {
            dishes.push(cleaned);
        }
    }

    dishes
}

fn matches_stoplist(candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    STOPLIST.iter().any(|stop| lower.contains(stop))
}

#[async_trait]
impl Restaurant for PizzaBuffa {
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
