//! # Menu Extraction Module
//!
//! Shared extraction strategies used by the restaurant adapters:
//!
//! - **Structural**: walk heading elements in document order, collect item
//!   text from the siblings following a day header until the next one.
//! - **Regex fallback**: capture per-day text blocks out of the flattened
//!   page text when the markup gives no usable structure.
//! - **Boilerplate filtering**: drop or trim recurring non-menu phrases
//!   (salad bar, buffet, price lines).
//! - **Fuzzy deduplication**: collapse near-identical dish strings mined
//!   from noisy free text.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

use crate::menu::DayMenu;
use crate::weekday::{is_day_header, normalize_day_name, starts_with_day_token, ALL_WEEKDAYS};

lazy_static! {
    static ref HEADING_SELECTOR: Selector =
        Selector::parse("h1, h2, h3, h4, h5, h6, strong").expect("valid heading selector");

    // One capture pattern per weekday: lazily grab everything up to the
    // next weekday token. Friday has no trailing boundary and runs to the
    // end of the text, which is why its lines must go through the
    // stoplist (trailing footer spam lands there).
    static ref DAY_PATTERNS: [Regex; 5] = [
        Regex::new(
            r"(?is)maanantai[:\s]*(.*?)(?:tiistai|tuesday|keskiviikko|wednesday|torstai|thursday|perjantai|friday|$)"
        ),
        Regex::new(
            r"(?is)tiistai[:\s]*(.*?)(?:keskiviikko|wednesday|torstai|thursday|perjantai|friday|$)"
        ),
        Regex::new(r"(?is)keskiviikko[:\s]*(.*?)(?:torstai|thursday|perjantai|friday|$)"),
        Regex::new(r"(?is)torstai[:\s]*(.*?)(?:perjantai|friday|$)"),
        Regex::new(r"(?is)perjantai[:\s]*(.*)"),
    ]
    .map(|r| r.expect("valid day capture pattern"));

    static ref PARENTHETICAL: Regex = Regex::new(r"\([^)]*\)").expect("valid parenthetical pattern");
}

/// Recurring non-menu phrases seen across the sources. Checked lowercased,
/// as whole-item or trailing-fragment matches.
pub const BOILERPLATE_PHRASES: [&str; 7] = [
    "pizzavalikoima",
    "salaatti- ja leipäpöytä",
    "salaattipöytä",
    "ruokajuomat ja kahvi",
    "lounas sisältää",
    "noutopöytä",
    "buffet",
];

/// Word-set overlap ratio above which two dish strings count as duplicates.
const FUZZY_OVERLAP_THRESHOLD: f64 = 0.7;

/// Structural strategy: scan heading-level elements in document order and
/// collect the sibling content following each recognized day header.
///
/// Candidate items come from paragraph, list-item and div-like siblings;
/// the walk stops at the next element that is itself a day header. A day
/// is recorded only if it accumulated at least one item, so weekend
/// headers (which never normalize) contribute nothing.
pub fn structural(doc: &Html) -> DayMenu {
    let mut menu = DayMenu::new();

    for heading in doc.select(&HEADING_SELECTOR) {
        let text = element_text(heading);
        if !is_day_header(&text) {
            continue;
        }
        let Some(day) = normalize_day_name(&text) else {
            // Weekend header: nothing to collect.
            continue;
        };
        let items = collect_sibling_items(heading);
        debug!("structural: {} -> {} candidate items", day, items.len());
        menu.insert(day, items);
    }

    menu
}

/// Walk forward through the siblings of a day header, gathering item text
/// until another day header shows up.
fn collect_sibling_items(heading: ElementRef<'_>) -> Vec<String> {
    let mut items = Vec::new();

    for node in heading.next_siblings() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };
        let tag = element.value().name();
        let text = element_text(element);

        if is_day_header(&text) && matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "strong")
        {
            break;
        }
        // A sibling block that opens with a day header means the next
        // section started inside a wrapper we cannot see past.
        if matches!(tag, "div" | "section") && starts_with_day_token(&text) {
            break;
        }

        match tag {
            "ul" | "ol" => {
                for li in element.child_elements().filter(|el| el.value().name() == "li") {
                    items.push(element_text(li));
                }
            }
            "p" | "li" | "div" | "td" => items.push(text),
            _ => {}
        }
    }

    items
}

/// Regex fallback strategy over flattened page text.
///
/// Assumes day sections appear contiguously and in weekday order. Each
/// captured block is split on line breaks; non-empty trimmed lines survive
/// unless the stoplist matches (case-insensitive substring), which is how
/// price lines, opening hours and the restaurant's own name get dropped.
pub fn regex_fallback(text: &str, stoplist: &[&str]) -> DayMenu {
    let mut menu = DayMenu::new();

    for (day, pattern) in ALL_WEEKDAYS.iter().zip(DAY_PATTERNS.iter()) {
        let Some(captures) = pattern.captures(text) else {
            continue;
        };
        let Some(block) = captures.get(1) else {
            continue;
        };
        let items: Vec<String> = block
            .as_str()
            .lines()
            .map(|line| line.trim().trim_start_matches(['-', '•', '*']).trim().to_string())
            .filter(|line| !line.is_empty() && !matches_stoplist(line, stoplist))
            .collect();
        menu.insert(*day, items);
    }

    menu
}

fn matches_stoplist(line: &str, stoplist: &[&str]) -> bool {
    let lower = line.to_lowercase();
    stoplist.iter().any(|stop| lower.contains(stop))
}

/// Strip boilerplate from one extracted item.
///
/// An item that is nothing but boilerplate is dropped. An item carrying a
/// trailing boilerplate fragment after a `-`, `—` or `:` separator keeps
/// only the leading dish name.
pub fn strip_boilerplate(item: &str) -> Option<String> {
    let trimmed = item.trim();
    if trimmed.is_empty() || is_boilerplate(trimmed) {
        return None;
    }

    for separator in ["—", " - ", ": "] {
        if let Some((head, tail)) = trimmed.split_once(separator) {
            if is_boilerplate(tail.trim()) {
                let head = head.trim();
                if head.is_empty() || is_boilerplate(head) {
                    return None;
                }
                return Some(head.to_string());
            }
        }
    }

    Some(trimmed.to_string())
}

fn is_boilerplate(text: &str) -> bool {
    let lower = text.to_lowercase();
    BOILERPLATE_PHRASES
        .iter()
        .any(|phrase| lower == *phrase || lower.starts_with(phrase))
}

/// Fuzzy duplicate check for dish strings mined from free text.
///
/// Allergen-code parentheticals are ignored and comparison is lowercased.
/// Two strings are duplicates when one contains the other, or when their
/// word sets overlap at 70 % or more of the larger set.
pub fn is_fuzzy_duplicate(a: &str, b: &str) -> bool {
    let a_core = normalize_for_comparison(a);
    let b_core = normalize_for_comparison(b);
    if a_core.is_empty() || b_core.is_empty() {
        return false;
    }
    if a_core.contains(&b_core) || b_core.contains(&a_core) {
        return true;
    }

    let a_words: HashSet<&str> = a_core.split_whitespace().collect();
    let b_words: HashSet<&str> = b_core.split_whitespace().collect();
    let larger = a_words.len().max(b_words.len());
    if larger == 0 {
        return false;
    }
    let shared = a_words.intersection(&b_words).count();
    shared as f64 / larger as f64 >= FUZZY_OVERLAP_THRESHOLD
}

fn normalize_for_comparison(text: &str) -> String {
    let stripped = PARENTHETICAL.replace_all(text, " ");
    stripped
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Deduplicate noisy candidates, preserving first-seen order and capping
/// the result at `max` items.
pub fn dedup_items(items: Vec<String>, max: usize) -> Vec<String> {
    let mut kept: Vec<String> = Vec::new();
    for item in items {
        if kept.len() >= max {
            break;
        }
        if !kept.iter().any(|existing| is_fuzzy_duplicate(existing, &item)) {
            kept.push(item);
        }
    }
    kept
}

/// Flatten a parsed document into newline-separated text for the regex
/// fallback. Text nodes become lines, which keeps the per-day capture
/// blocks line-splittable.
pub fn flatten_text(doc: &Html) -> String {
    doc.root_element()
        .text()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whitespace-collapsed text content of one element.
pub fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    #[test]
    fn test_structural_weekend_excluded() {
        let html = Html::parse_document(
            "<h3>Perjantai</h3>\
             <ul><li>Pinaattikeitto (L, G)</li><li>Possunleike (L)</li><li>Broileripasta (L)</li></ul>\
             <h3>Lauantai</h3>\
             <p>Brunssi 24 €</p>",
        );
        let menu = structural(&html);
        assert_eq!(menu.len(), 1);
        let friday = menu.get(Weekday::Perjantai).unwrap();
        assert_eq!(friday.len(), 3);
        assert_eq!(friday[0], "Pinaattikeitto (L, G)");
    }

    #[test]
    fn test_structural_stops_at_next_day() {
        let html = Html::parse_document(
            "<h3>Maanantai</h3><p>Hernekeitto (L)</p>\
             <h3>Tiistai</h3><p>Kalakeitto (L, G)</p>",
        );
        let menu = structural(&html);
        assert_eq!(menu.get(Weekday::Maanantai), Some(&["Hernekeitto (L)".to_string()][..]));
        assert_eq!(menu.get(Weekday::Tiistai), Some(&["Kalakeitto (L, G)".to_string()][..]));
    }

    #[test]
    fn test_regex_fallback_bounded_by_english_synonym() {
        let menu = regex_fallback("Maanantai: Soup A\nTuesday content...", &[]);
        assert_eq!(menu.len(), 1);
        assert_eq!(menu.get(Weekday::Maanantai), Some(&["Soup A".to_string()][..]));
    }

    #[test]
    fn test_regex_fallback_friday_stoplist() {
        let text = "Perjantai:\nPinaattikeitto (L, G)\nLounas 12,50 €\nAukioloajat\nMA - PE 8-15";
        let menu = regex_fallback(text, &["lounas", "aukioloajat", "ma - pe"]);
        let friday = menu.get(Weekday::Perjantai).unwrap();
        assert_eq!(friday, &["Pinaattikeitto (L, G)".to_string()][..]);
    }

    #[test]
    fn test_strip_boilerplate_trailing_fragment() {
        assert_eq!(
            strip_boilerplate("Broileripasta - salaattipöytä").as_deref(),
            Some("Broileripasta")
        );
        assert_eq!(strip_boilerplate("Salaattipöytä"), None);
        assert_eq!(
            strip_boilerplate("Lohikeitto (L, G)").as_deref(),
            Some("Lohikeitto (L, G)")
        );
    }

    #[test]
    fn test_fuzzy_duplicate_substring() {
        assert!(is_fuzzy_duplicate("Lohikeitto (L)", "Lohikeitto"));
        assert!(is_fuzzy_duplicate("Lohikeitto", "Lohikeitto (L)"));
        assert!(!is_fuzzy_duplicate("Lohikeitto", "Possupata"));
    }

    #[test]
    fn test_fuzzy_duplicate_word_overlap() {
        assert!(is_fuzzy_duplicate(
            "Paahdettua lohta ja tilliperunat",
            "Paahdettua lohta sekä tilliperunat"
        ));
        assert!(!is_fuzzy_duplicate(
            "Paahdettua lohta tilliperunoilla",
            "Juustoista broileripastaa yrteillä"
        ));
    }

    #[test]
    fn test_dedup_items_order_and_cap() {
        let items = vec![
            "Lohikeitto (L, G)".to_string(),
            "Lohikeitto".to_string(),
            "Possupata".to_string(),
            "Kasvislasagne".to_string(),
        ];
        let deduped = dedup_items(items, 2);
        assert_eq!(deduped, vec!["Lohikeitto (L, G)".to_string(), "Possupata".to_string()]);
    }

    #[test]
    fn test_flatten_text_produces_lines() {
        let html = Html::parse_document("<div><p>Maanantai:</p><p>Soup A</p></div>");
        let flat = flatten_text(&html);
        assert_eq!(flat, "Maanantai:\nSoup A");
    }
}
