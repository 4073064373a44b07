//! Nokian Kartano (FoodCo) lunch menu adapter.
//!
//! The Compass Group page renders the week as loose text, so the regex
//! day-capture fallback over flattened page text is the primary strategy
//! here. The stoplist drops the chain's boilerplate: buffet and price
//! lines, brand mentions, and generic lunch wording.

use async_trait::async_trait;
use reqwest::Client;
use scraper::Html;

use super::{fetch_text, Restaurant};
use crate::extract::{flatten_text, regex_fallback};
use crate::menu::DayMenu;

const NAME: &str = "Nokian Kartano (FoodCo)";
const URL: &str =
    "https://www.compass-group.fi/ravintolat-ja-ruokalistat/foodco/kaupungit/nokia/nokian-kartano/";

const STOPLIST: [&str; 10] = [
    "lounas",
    "keitto",
    "salaatti",
    "buffet",
    "hinta",
    "€",
    "euro",
    "foodco",
    "compass",
    "ravintola",
];

pub struct NokianKartano;

impl NokianKartano {
    pub fn extract(doc: &Html) -> DayMenu {
        // Day sections appear contiguously in the page text; anything the
        // capture picks up beyond dishes is stoplist noise.
        regex_fallback(&flatten_text(doc), &STOPLIST)
    }
}

#[async_trait]
impl Restaurant for NokianKartano {
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
    fn test_week_text_extraction() {
        let html = Html::parse_document(
            "<main>\
             <p>Maanantai</p><p>Broileria currykastikkeessa (L, G)</p>\
             <p>Tiistai</p><p>Lihapullat ja perunamuusi (L)</p>\
             <p>Lounas 11,90 € sisältää salaattipöydän</p>\
             <p>Keskiviikko</p><p>Uunilohta ja tilliperunat (L, G)</p>\
             </main>",
        );
        let menu = NokianKartano::extract(&html);
        assert_eq!(
            menu.get(Weekday::Maanantai),
            Some(&["Broileria currykastikkeessa (L, G)".to_string()][..])
        );
        assert_eq!(
            menu.get(Weekday::Tiistai),
            Some(&["Lihapullat ja perunamuusi (L)".to_string()][..])
        );
        assert_eq!(
            menu.get(Weekday::Keskiviikko),
            Some(&["Uunilohta ja tilliperunat (L, G)".to_string()][..])
        );
    }

    #[test]
    fn test_brand_boilerplate_dropped() {
        let html = Html::parse_document(
            "<main>\
             <p>Perjantai</p>\
             <p>Paistettua kuhaa (M, G)</p>\
             <p>Ravintola Nokian Kartano</p>\
             <p>FoodCo on osa Compass Groupia</p>\
             </main>",
        );
        let menu = NokianKartano::extract(&html);
        assert_eq!(
            menu.get(Weekday::Perjantai),
            Some(&["Paistettua kuhaa (M, G)".to_string()][..])
        );
    }

    #[test]
    fn test_menuless_page_is_empty() {
        let html = Html::parse_document("<main><p>Tervetuloa ravintolaamme!</p></main>");
        assert!(NokianKartano::extract(&html).is_empty());
    }
}
