use crate::data_fetcher::models::{LeagueEntry, LeagueRule};
use crate::error::AppError;
use crate::view::{ViewFrame, ViewSink};

/// Test utilities for creating league data and capturing rendered output
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a league with only an id
    pub fn league(id: &str) -> LeagueEntry {
        LeagueEntry {
            id: id.to_string(),
            start_at: None,
            end_at: None,
            description: None,
            rules: Vec::new(),
        }
    }

    /// Creates a league with a description and `(name, description)` rules
    pub fn league_with_rules(
        id: &str,
        description: Option<&str>,
        rules: &[(&str, Option<&str>)],
    ) -> LeagueEntry {
        LeagueEntry {
            description: description.map(str::to_string),
            rules: rules
                .iter()
                .map(|(name, description)| LeagueRule {
                    name: name.to_string(),
                    description: description.map(str::to_string),
                })
                .collect(),
            ..Self::league(id)
        }
    }

    /// Creates a league with start and end timestamps
    pub fn dated_league(id: &str, start_at: &str, end_at: Option<&str>) -> LeagueEntry {
        LeagueEntry {
            start_at: Some(start_at.to_string()),
            end_at: end_at.map(str::to_string),
            ..Self::league(id)
        }
    }

    /// Serializes leagues the way the upstream leagues API returns them
    pub fn leagues_json(entries: &[LeagueEntry]) -> String {
        serde_json::to_string(entries).unwrap_or_else(|_| "[]".to_string())
    }
}

/// View sink that keeps every rendered frame in memory
#[derive(Debug, Default)]
pub struct RecordingView {
    pub frames: Vec<ViewFrame>,
}

impl RecordingView {
    pub fn last(&self) -> Option<&ViewFrame> {
        self.frames.last()
    }

    /// Titles of the cards in the most recent frame
    pub fn last_titles(&self) -> Vec<String> {
        self.last()
            .map(|frame| frame.cards.iter().map(|card| card.title.clone()).collect())
            .unwrap_or_default()
    }
}

impl ViewSink for RecordingView {
    fn render(&mut self, frame: &ViewFrame) -> Result<(), AppError> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
