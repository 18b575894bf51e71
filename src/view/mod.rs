//! Rendering of the listing into displayable cards.
//!
//! The pipeline turns its state into a [`ViewFrame`]; a [`ViewSink`] decides
//! how that frame reaches the user (terminal, HTML file, or a test recorder).

pub mod html;
pub mod terminal;
pub mod time_formatting;

pub use html::HtmlView;
pub use terminal::TerminalView;

use crate::constants::placeholders;
use crate::data_fetcher::models::LeagueEntry;
use crate::error::AppError;
use crate::filter::Category;
use crate::pipeline::Provenance;
use chrono::{Local, TimeZone};
use std::fmt::Display;
use time_formatting::format_optional_date_in;

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Ok,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLine {
    pub name: String,
    pub description: String,
}

/// One rendered league.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueCard {
    pub title: String,
    pub start: String,
    pub end: String,
    pub description: Option<String>,
    pub rules: Vec<RuleLine>,
    pub provenance: Provenance,
}

impl LeagueCard {
    pub fn is_sample(&self) -> bool {
        self.provenance == Provenance::Sample
    }
}

/// Everything a view needs to draw one state of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFrame {
    pub title: String,
    pub status: StatusLine,
    pub search_term: String,
    pub category: Category,
    pub cards: Vec<LeagueCard>,
    /// Shown instead of cards when there is nothing to list
    pub empty_message: Option<String>,
}

/// Output capability for rendered frames.
pub trait ViewSink {
    fn render(&mut self, frame: &ViewFrame) -> Result<(), AppError>;
}

/// Builds a card with dates rendered in the local timezone.
pub fn build_card(entry: &LeagueEntry, provenance: Provenance) -> LeagueCard {
    build_card_in(entry, provenance, &Local)
}

/// Builds a card with dates rendered in `tz`.
pub fn build_card_in<Tz>(entry: &LeagueEntry, provenance: Provenance, tz: &Tz) -> LeagueCard
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let start_placeholder = match provenance {
        Provenance::Live => placeholders::START_LIVE,
        Provenance::Sample => placeholders::START_SAMPLE,
    };

    LeagueCard {
        title: entry.id.clone(),
        start: format_optional_date_in(entry.start_at.as_deref(), start_placeholder, tz),
        end: format_optional_date_in(entry.end_at.as_deref(), placeholders::END_MISSING, tz),
        description: entry
            .description
            .as_ref()
            .filter(|d| !d.trim().is_empty())
            .cloned(),
        rules: entry
            .rules
            .iter()
            .map(|rule| RuleLine {
                name: rule.name.clone(),
                description: rule
                    .description
                    .clone()
                    .unwrap_or_else(|| placeholders::RULE_DESCRIPTION.to_string()),
            })
            .collect(),
        provenance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;
    use chrono::Utc;

    #[test]
    fn test_build_card_live_placeholders() {
        let entry = TestDataBuilder::league("Dawn of the Hunt");
        let card = build_card_in(&entry, Provenance::Live, &Utc);

        assert_eq!(card.title, "Dawn of the Hunt");
        assert_eq!(card.start, "TBA");
        assert_eq!(card.end, "Ongoing");
        assert!(!card.is_sample());
    }

    #[test]
    fn test_build_card_sample_placeholder() {
        let entry = TestDataBuilder::league("Endless Delve Event");
        let card = build_card_in(&entry, Provenance::Sample, &Utc);

        assert_eq!(card.start, "N/A");
        assert_eq!(card.end, "Ongoing");
        assert!(card.is_sample());
    }

    #[test]
    fn test_build_card_dates_and_rules() {
        let mut entry = TestDataBuilder::league_with_rules(
            "Necropolis League",
            Some("Raise the dead"),
            &[("Haunted", Some("Lantern mods")), ("Bare", None)],
        );
        entry.start_at = Some("2024-03-29T19:00:00Z".to_string());
        entry.end_at = Some("2024-07-22T21:00:00Z".to_string());

        let card = build_card_in(&entry, Provenance::Live, &Utc);

        assert_eq!(card.start, "Mar 29, 2024");
        assert_eq!(card.end, "Jul 22, 2024");
        assert_eq!(card.description.as_deref(), Some("Raise the dead"));
        assert_eq!(
            card.rules,
            vec![
                RuleLine {
                    name: "Haunted".to_string(),
                    description: "Lantern mods".to_string(),
                },
                RuleLine {
                    name: "Bare".to_string(),
                    description: "No description available.".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_build_card_is_deterministic() {
        let entry = TestDataBuilder::league("Dawn of the Hunt");
        assert_eq!(
            build_card_in(&entry, Provenance::Live, &Utc),
            build_card_in(&entry, Provenance::Live, &Utc)
        );
    }
}
