//! # Lounasvahti
//!
//! A stateless lunch-menu notifier: scrapes the weekly menus of a few
//! Nokia-area restaurants, normalizes them into a weekday-keyed model,
//! renders one combined message and posts it to a Telegram channel in
//! length-bounded chunks.

pub mod extract;
pub mod format;
pub mod menu;
pub mod restaurants;
pub mod scrape;
pub mod split;
pub mod telegram;
pub mod weekday;
