//! # Menu Model Module
//!
//! The normalized per-source result: an insertion-ordered mapping from
//! weekday to dish strings, and the tagged outcome type the formatter
//! consumes to decide between a menu block and a failure line.

use crate::weekday::Weekday;

/// Minimum trimmed length for a dish string to count as a real item.
/// Shorter fragments are extraction noise (stray codes, separators).
pub const MIN_ITEM_LEN: usize = 4;

/// A weekly menu for one restaurant: weekday -> ordered dish list.
///
/// Insertion order is display order. A day is present only if it has at
/// least one item; empty days are omitted rather than stored as empty
/// lists. Built fresh on every scrape, never cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayMenu {
    days: Vec<(Weekday, Vec<String>)>,
}

impl DayMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a day's items, trimming each and dropping anything under the
    /// validity floor. The day is recorded only if something survives; a
    /// day inserted twice keeps its first position and appends the new
    /// items.
    pub fn insert(&mut self, day: Weekday, items: impl IntoIterator<Item = String>) {
        let cleaned: Vec<String> = items
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| item.chars().count() >= MIN_ITEM_LEN)
            .collect();
        if cleaned.is_empty() {
            return;
        }
        if let Some((_, existing)) = self.days.iter_mut().find(|(d, _)| *d == day) {
            existing.extend(cleaned);
        } else {
            self.days.push((day, cleaned));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Days and their items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[String])> {
        self.days.iter().map(|(day, items)| (*day, items.as_slice()))
    }

    pub fn get(&self, day: Weekday) -> Option<&[String]> {
        self.days
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, items)| items.as_slice())
    }
}

/// Result of scraping one source. Emptiness of the menu is decided at the
/// adapter boundary and carried as an explicit tag, so downstream code
/// never inspects string prefixes or guesses from missing keys.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuOutcome {
    Menu(DayMenu),
    Unavailable,
}

impl From<DayMenu> for MenuOutcome {
    fn from(menu: DayMenu) -> Self {
        if menu.is_empty() {
            MenuOutcome::Unavailable
        } else {
            MenuOutcome::Menu(menu)
        }
    }
}
