//! # Weekday Vocabulary Module
//!
//! Canonical Finnish weekday names and the matching rules shared by every
//! restaurant extractor: loose day-header detection, normalization of free
//! text to a canonical weekday, and the weekend-to-Monday targeting policy
//! used when composing the daily post.

use std::fmt;

/// Canonical lunch weekdays, Monday through Friday, in week order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Maanantai,
    Tiistai,
    Keskiviikko,
    Torstai,
    Perjantai,
}

/// All lunch weekdays in week order.
pub const ALL_WEEKDAYS: [Weekday; 5] = [
    Weekday::Maanantai,
    Weekday::Tiistai,
    Weekday::Keskiviikko,
    Weekday::Torstai,
    Weekday::Perjantai,
];

// English synonyms accepted by some sources, indexed like ALL_WEEKDAYS.
const ENGLISH_NAMES: [&str; 5] = ["monday", "tuesday", "wednesday", "thursday", "friday"];

// Weekend tokens are recognized as headers (so extraction stops at them)
// but never normalize to a lunch weekday.
const WEEKEND_TOKENS: [&str; 4] = ["lauantai", "sunnuntai", "saturday", "sunday"];

impl Weekday {
    /// Canonical Finnish name, e.g. `"Maanantai"`.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Maanantai => "Maanantai",
            Weekday::Tiistai => "Tiistai",
            Weekday::Keskiviikko => "Keskiviikko",
            Weekday::Torstai => "Torstai",
            Weekday::Perjantai => "Perjantai",
        }
    }

    /// Weekday from a chrono-style index where Monday is 0.
    /// Returns `None` for weekend indices.
    pub fn from_index(index: u32) -> Option<Weekday> {
        ALL_WEEKDAYS.get(index as usize).copied()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check whether `text` looks like a day header.
///
/// Deliberately loose: a case-insensitive substring match anywhere in the
/// text, so headers like `"Tiistai 12.8."` or `"Monday Specials"` count.
/// Weekend names also count, because extractors use this as a stop
/// condition when walking past a day section.
pub fn is_day_header(text: &str) -> bool {
    let lower = text.to_lowercase();
    ALL_WEEKDAYS
        .iter()
        .enumerate()
        .any(|(i, day)| {
            lower.contains(&day.name().to_lowercase()) || lower.contains(ENGLISH_NAMES[i])
        })
        || WEEKEND_TOKENS.iter().any(|token| lower.contains(token))
}

/// Check whether `text` opens with a weekday token (anchored variant of
/// [`is_day_header`]). Extractors use this to tell a block that starts a
/// new day section apart from a dish that merely mentions a day.
pub fn starts_with_day_token(text: &str) -> bool {
    let lower = text.trim_start().to_lowercase();
    ALL_WEEKDAYS
        .iter()
        .enumerate()
        .any(|(i, day)| {
            lower.starts_with(&day.name().to_lowercase()) || lower.starts_with(ENGLISH_NAMES[i])
        })
        || WEEKEND_TOKENS.iter().any(|token| lower.starts_with(token))
}

/// Normalize free text to a canonical lunch weekday.
///
/// The first recognized Finnish or English Monday–Friday token wins; weekend
/// tokens and unrecognized text yield `None`.
pub fn normalize_day_name(text: &str) -> Option<Weekday> {
    let lower = text.to_lowercase();
    let mut best: Option<(usize, Weekday)> = None;
    for (i, day) in ALL_WEEKDAYS.iter().enumerate() {
        for token in [day.name().to_lowercase(), ENGLISH_NAMES[i].to_string()] {
            if let Some(pos) = lower.find(&token) {
                if best.map_or(true, |(p, _)| pos < p) {
                    best = Some((pos, *day));
                }
            }
        }
    }
    best.map(|(_, day)| day)
}

/// The weekday whose menu should be highlighted for a given weekday index
/// (Monday = 0). On weekends the upcoming Monday's menu is shown.
pub fn target_day_for(weekday_index: u32) -> Weekday {
    Weekday::from_index(weekday_index).unwrap_or(Weekday::Maanantai)
}
