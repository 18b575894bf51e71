//! Search and category filtering over the league snapshot.

use crate::constants::leagues::{EVENT_MARKERS, MAIN_MARKER};
use crate::data_fetcher::models::LeagueEntry;
use std::fmt;

/// Category buttons of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Category {
    #[default]
    All,
    Main,
    Event,
}

impl Category {
    /// Next category in the All -> Main -> Event -> All cycle
    pub fn next(self) -> Self {
        match self {
            Category::All => Category::Main,
            Category::Main => Category::Event,
            Category::Event => Category::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Main => "Main",
            Category::Event => "Event",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Transient filter input: search box contents and the active category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search_term: String,
    pub active_category: Category,
}

impl FilterState {
    pub fn new(search_term: impl Into<String>, active_category: Category) -> Self {
        Self {
            search_term: search_term.into(),
            active_category,
        }
    }
}

/// Main leagues carry the league marker or have no parenthesised suffix.
pub fn is_main_league(id: &str) -> bool {
    id.to_lowercase().contains(MAIN_MARKER) || !id.contains('(')
}

/// Events and races carry one of the event markers.
pub fn is_event_league(id: &str) -> bool {
    let id = id.to_lowercase();
    EVENT_MARKERS.iter().any(|marker| id.contains(marker))
}

pub fn matches_category(entry: &LeagueEntry, category: Category) -> bool {
    match category {
        Category::All => true,
        Category::Main => is_main_league(&entry.id),
        Category::Event => is_event_league(&entry.id),
    }
}

/// Case-insensitive substring match against the id, the description and
/// every rule name and description. An empty term matches everything;
/// whitespace is part of the term.
pub fn matches_search(entry: &LeagueEntry, term: &str) -> bool {
    let term = term.to_lowercase();
    if term.is_empty() {
        return true;
    }
    let hit = |text: &str| text.to_lowercase().contains(&term);

    hit(&entry.id)
        || entry.description.as_deref().is_some_and(hit)
        || entry.rules.iter().any(|rule| {
            hit(&rule.name) || rule.description.as_deref().is_some_and(hit)
        })
}

/// Derives the displayed subset from the full snapshot.
pub fn filter_leagues<'a>(snapshot: &'a [LeagueEntry], state: &FilterState) -> Vec<&'a LeagueEntry> {
    snapshot
        .iter()
        .filter(|entry| matches_category(entry, state.active_category))
        .filter(|entry| matches_search(entry, &state.search_term))
        .collect()
}
