//! Kahvila Epilä lunch menu adapter.
//!
//! The page is a server-rendered week listing with day headings. The
//! structural strategy is tried first; when the markup gives nothing the
//! regex fallback runs over the flattened text with a stoplist that drops
//! the price/opening-hours footer trailing the Friday section.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use scraper::Html;

use super::{fetch_text, Restaurant};
use crate::extract::{flatten_text, regex_fallback, structural};
use crate::menu::DayMenu;

const NAME: &str = "Kahvila Epilä";
const URL: &str = "https://www.kahvilaepila.com/lounaslista/";

// Footer and sidebar lines that pollute the regex capture, Friday's most
// of all since its capture runs to the end of the page text.
const STOPLIST: [&str; 6] = [
    "lounas",
    "aukioloajat",
    "kahvila epilä",
    "facebook",
    "ma - pe",
    "€",
];

pub struct KahvilaEpila;

impl KahvilaEpila {
    /// Extraction over an already-parsed document, split out so fixture
    /// tests can exercise it without a network fetch.
    pub fn extract(doc: &Html) -> DayMenu {
        let menu = structural(doc);
        if !menu.is_empty() {
            return menu;
        }
        debug!("{}: structural extraction empty, trying regex fallback", NAME);
        regex_fallback(&flatten_text(doc), &STOPLIST)
    }
}

#[async_trait]
impl Restaurant for KahvilaEpila {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    #[test]
    fn test_structural_week_listing() {
        let html = Html::parse_document(
            "<div class='entry-content'>\
             <h2>Viikko 33</h2>\
             <h3>Maanantai</h3>\
             <ul><li>Hernekeitto (L)</li><li>Pannukakku</li></ul>\
             <h3>Tiistai</h3>\
             <p>Kalakeitto (L, G)</p>\
             </div>",
        );
        let menu = KahvilaEpila::extract(&html);
        assert_eq!(menu.len(), 2);
        assert_eq!(
            menu.get(Weekday::Maanantai),
            Some(&["Hernekeitto (L)".to_string(), "Pannukakku".to_string()][..])
        );
        assert_eq!(menu.get(Weekday::Tiistai), Some(&["Kalakeitto (L, G)".to_string()][..]));
    }

    #[test]
    fn test_regex_fallback_filters_friday_spam() {
        // No headings at all, so structural extraction yields nothing and
        // the flattened-text fallback takes over.
        let html = Html::parse_document(
            "<div>\
             <span>Viikko 2</span>\
             <span>Maanantai:</span><span>Ruoka 1</span>\
             <span>Tiistai:</span><span>Ruoka 2</span>\
             <span>Keskiviikko:</span><span>Ruoka 3</span>\
             <span>Torstai:</span><span>Ruoka 4</span>\
             <span>Perjantai:</span>\
             <span>Pinaattikeitto (L, G)</span>\
             <span>Possunleike (L)</span>\
             <span>Broileripasta (L)</span>\
             <span>Lounas 12,50 €, keittolounas 10 €.</span>\
             <span>Lounas myös mukaan!</span>\
             <span>Kahvila Epilä</span>\
             <span>Aukioloajat</span>\
             <span>MA - PE: 08:00 - 15:00</span>\
             <span>Seuraa meitä Facebookissa</span>\
             </div>",
        );
        let menu = KahvilaEpila::extract(&html);

        let friday = menu.get(Weekday::Perjantai).expect("friday present");
        assert_eq!(
            friday,
            &[
                "Pinaattikeitto (L, G)".to_string(),
                "Possunleike (L)".to_string(),
                "Broileripasta (L)".to_string(),
            ][..]
        );
        assert_eq!(menu.get(Weekday::Maanantai), Some(&["Ruoka 1".to_string()][..]));
    }

    #[test]
    fn test_unrecognized_page_is_empty() {
        let html = Html::parse_document("<p>Sivua ei löytynyt</p>");
        assert!(KahvilaEpila::extract(&html).is_empty());
    }
}
