#[cfg(test)]
mod tests {
    use lounasvahti::menu::MenuOutcome;
    use lounasvahti::restaurants::{default_restaurants, KahvilaEpila, StahlbergLielahti};
    use lounasvahti::weekday::Weekday;
    use scraper::Html;

    #[test]
    fn test_source_identities() {
        let restaurants = default_restaurants();
        assert_eq!(restaurants.len(), 5);

        let names: Vec<&str> = restaurants.iter().map(|r| r.name()).collect();
        assert_eq!(names[0], "Kahvila Epilä");
        assert_eq!(names[1], "Kontukeittiö Nokia");
        assert_eq!(names[2], "Nokian Kartano (FoodCo)");

        for restaurant in &restaurants {
            assert!(restaurant.origin().starts_with("https://"), "{}", restaurant.name());
        }
    }

    #[test]
    fn test_epila_structural_and_fallback_agree_on_week() {
        let structured = Html::parse_document(
            "<h3>Maanantai</h3><ul><li>Hernekeitto (L)</li></ul>\
             <h3>Tiistai</h3><ul><li>Kalakeitto (L, G)</li></ul>",
        );
        let flat = Html::parse_document(
            "<div>\
             <span>Maanantai:</span><span>Hernekeitto (L)</span>\
             <span>Tiistai:</span><span>Kalakeitto (L, G)</span>\
             </div>",
        );
        let from_structure = KahvilaEpila::extract(&structured);
        let from_text = KahvilaEpila::extract(&flat);
        assert_eq!(from_structure, from_text);
    }

    #[test]
    fn test_empty_extraction_maps_to_unavailable() {
        let html = Html::parse_document("<p>Ei lounasta tällä viikolla</p>");
        let menu = StahlbergLielahti::extract(&html);
        assert_eq!(MenuOutcome::from(menu), MenuOutcome::Unavailable);
    }

    #[test]
    fn test_stahlberg_week_table() {
        let html = Html::parse_document(
            "<h3>Keskiviikko 10:30-15:00</h3>\
             <table class='ruokalista'><tbody>\
             <tr><td class='column-1'>Jauhelihakastike ja spagetti (L)</td>\
                 <td class='column-2'>10,90 €</td></tr>\
             <tr><td class='column-1'>Paahdettua kukkakaalia (VEG, G)</td>\
                 <td class='column-2'>10,90 €</td></tr>\
             </tbody></table>",
        );
        let menu = StahlbergLielahti::extract(&html);
        let wednesday = menu.get(Weekday::Keskiviikko).expect("wednesday present");
        assert_eq!(wednesday.len(), 2);
        assert!(wednesday[0].starts_with("Jauhelihakastike"));
        // Price column never leaks into items.
        assert!(!wednesday.iter().any(|item| item.contains('€')));
    }
}
