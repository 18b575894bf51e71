//! Listing pipeline: fetch -> normalize -> filter -> render, with a sample-data
//! fallback when the source cannot be used.
//!
//! All state lives in one [`ListingPipeline`] value. The snapshot is replaced
//! wholesale when a fetch completes and the displayed subset is always derived
//! from it through [`filter_leagues`].

use crate::constants::{placeholders, rate_limit::DEFAULT_RETRY_AFTER_SECONDS, ui::TITLE};
use crate::data_fetcher::{
    ListingSource, fetch_listing, models::LeagueEntry, normalize_leagues, sample_leagues,
};
use crate::error::AppError;
use crate::filter::{Category, FilterState, filter_leagues};
use crate::view::{StatusKind, StatusLine, ViewFrame, ViewSink, build_card};
use reqwest::Client;
use tracing::{info, warn};

/// Where the entries of a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Live,
    Sample,
}

/// Why the pipeline ended up degraded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegradedReason {
    /// 429 from the source; nothing is shown until the user tries again
    RateLimited { retry_after_seconds: u64 },
    /// Any other failure; the sample set is shown instead
    Fallback { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Degraded(DegradedReason),
}

/// The full set of leagues currently considered "all leagues".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSnapshot {
    pub entries: Vec<LeagueEntry>,
    pub provenance: Provenance,
}

impl ListingSnapshot {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            provenance: Provenance::Live,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPipeline {
    state: LoadState,
    snapshot: ListingSnapshot,
    filter: FilterState,
}

impl ListingPipeline {
    pub fn new(filter: FilterState) -> Self {
        Self {
            state: LoadState::Idle,
            snapshot: ListingSnapshot::empty(),
            filter,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn snapshot(&self) -> &ListingSnapshot {
        &self.snapshot
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Idle -> Loading. Any previous snapshot stays visible until the result lands.
    pub fn begin_loading(&mut self) {
        self.state = LoadState::Loading;
    }

    /// Loading -> Loaded or Degraded, replacing the snapshot.
    pub fn apply_fetch_result(&mut self, result: Result<Vec<LeagueEntry>, AppError>) {
        let (state, snapshot) = resolve_fetch_result(result);
        self.state = state;
        self.snapshot = snapshot;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.filter.search_term.push(ch);
    }

    /// Removes the last character of the search term; false if it was already empty.
    pub fn pop_search_char(&mut self) -> bool {
        self.filter.search_term.pop().is_some()
    }

    pub fn set_category(&mut self, category: Category) {
        self.filter.active_category = category;
    }

    pub fn cycle_category(&mut self) {
        self.filter.active_category = self.filter.active_category.next();
    }

    /// Entries to display, re-derived from the full snapshot.
    pub fn displayed(&self) -> Vec<&LeagueEntry> {
        filter_leagues(&self.snapshot.entries, &self.filter)
    }

    pub fn status_line(&self) -> StatusLine {
        let total = self.snapshot.entries.len();
        let shown = self.displayed().len();
        status_for(&self.state, shown, total)
    }

    /// Builds the frame for the current state.
    pub fn frame(&self) -> ViewFrame {
        let displayed = self.displayed();
        let cards = match self.state {
            LoadState::Loaded | LoadState::Degraded(DegradedReason::Fallback { .. }) => displayed
                .iter()
                .map(|entry| build_card(entry, self.snapshot.provenance))
                .collect(),
            _ => Vec::new(),
        };

        let empty_message = match self.state {
            LoadState::Loaded if self.snapshot.entries.is_empty() => {
                Some(placeholders::EMPTY_STATE.to_string())
            }
            LoadState::Loaded | LoadState::Degraded(DegradedReason::Fallback { .. })
                if displayed.is_empty() =>
            {
                Some("No leagues match the current filters.".to_string())
            }
            _ => None,
        };

        ViewFrame {
            title: TITLE.to_string(),
            status: status_for(&self.state, displayed.len(), self.snapshot.entries.len()),
            search_term: self.filter.search_term.clone(),
            category: self.filter.active_category,
            cards,
            empty_message,
        }
    }

    pub fn render(&self, view: &mut dyn ViewSink) -> Result<(), AppError> {
        view.render(&self.frame())
    }
}

/// Maps a fetch outcome to the next state and snapshot.
pub fn resolve_fetch_result(
    result: Result<Vec<LeagueEntry>, AppError>,
) -> (LoadState, ListingSnapshot) {
    match result {
        Ok(entries) => {
            let entries = normalize_leagues(entries);
            info!("Listing loaded with {} leagues", entries.len());
            (
                LoadState::Loaded,
                ListingSnapshot {
                    entries,
                    provenance: Provenance::Live,
                },
            )
        }
        Err(e) if !e.falls_back_to_sample() => {
            let retry_after_seconds = e.retry_after_seconds().unwrap_or(DEFAULT_RETRY_AFTER_SECONDS);
            warn!("Listing source rate limited, retry after {retry_after_seconds}s");
            (
                LoadState::Degraded(DegradedReason::RateLimited { retry_after_seconds }),
                ListingSnapshot::empty(),
            )
        }
        Err(e) => {
            warn!("Failed to load leagues, showing sample data: {e}");
            (
                LoadState::Degraded(DegradedReason::Fallback {
                    reason: e.short_reason().to_string(),
                }),
                ListingSnapshot {
                    entries: sample_leagues(),
                    provenance: Provenance::Sample,
                },
            )
        }
    }
}

fn status_for(state: &LoadState, shown: usize, total: usize) -> StatusLine {
    match state {
        LoadState::Idle => StatusLine::new(StatusKind::Info, "Waiting to load leagues"),
        LoadState::Loading => StatusLine::new(StatusKind::Info, "Loading leagues..."),
        LoadState::Loaded => StatusLine::new(
            StatusKind::Ok,
            format!("Showing {shown} of {total} leagues"),
        ),
        LoadState::Degraded(DegradedReason::RateLimited {
            retry_after_seconds,
        }) => StatusLine::new(
            StatusKind::Warning,
            format!(
                "Rate limited by the league API. Try again in {retry_after_seconds} seconds."
            ),
        ),
        LoadState::Degraded(DegradedReason::Fallback { reason }) => StatusLine::new(
            StatusKind::Error,
            format!("Error loading leagues ({reason}). Showing sample data: {shown} of {total}"),
        ),
    }
}

/// Runs one full load: Idle -> Loading -> Loaded/Degraded.
///
/// Never fails; every source error is absorbed into the returned state.
pub async fn load_listing(
    client: &Client,
    source: &ListingSource,
    filter: FilterState,
) -> ListingPipeline {
    let mut pipeline = ListingPipeline::new(filter);
    pipeline.begin_loading();
    let result = fetch_listing(client, source).await;
    pipeline.apply_fetch_result(result);
    pipeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::{RecordingView, TestDataBuilder};

    fn loaded(ids: &[&str]) -> ListingPipeline {
        let mut pipeline = ListingPipeline::new(FilterState::default());
        pipeline.begin_loading();
        pipeline.apply_fetch_result(Ok(ids.iter().map(|id| TestDataBuilder::league(id)).collect()));
        pipeline
    }

    #[test]
    fn test_state_transitions() {
        let mut pipeline = ListingPipeline::new(FilterState::default());
        assert_eq!(pipeline.state(), &LoadState::Idle);

        pipeline.begin_loading();
        assert_eq!(pipeline.state(), &LoadState::Loading);
        assert_eq!(pipeline.status_line().text, "Loading leagues...");
        assert!(pipeline.frame().cards.is_empty());

        pipeline.apply_fetch_result(Ok(vec![TestDataBuilder::league("Dawn of the Hunt")]));
        assert_eq!(pipeline.state(), &LoadState::Loaded);
        assert_eq!(pipeline.snapshot().provenance, Provenance::Live);
    }

    #[test]
    fn test_loaded_normalizes_and_counts() {
        let pipeline = loaded(&["Standard", "Hardcore", "Dawn of the Hunt", "SSF Dawn of the Hunt"]);

        assert_eq!(pipeline.snapshot().entries.len(), 1);
        let frame = pipeline.frame();
        assert_eq!(frame.cards.len(), 1);
        assert_eq!(frame.status.kind, StatusKind::Ok);
        assert_eq!(frame.status.text, "Showing 1 of 1 leagues");
    }

    #[test]
    fn test_rate_limited_with_hint() {
        let mut pipeline = ListingPipeline::new(FilterState::default());
        pipeline.begin_loading();
        pipeline.apply_fetch_result(Err(AppError::upstream_rate_limited("url", Some(15))));

        let frame = pipeline.frame();
        assert!(frame.status.text.contains("15"));
        assert_eq!(frame.status.kind, StatusKind::Warning);
        assert!(frame.cards.is_empty());
        assert!(pipeline.snapshot().entries.is_empty());
        assert_eq!(frame.empty_message, None);
    }

    #[test]
    fn test_rate_limited_default_hint() {
        let mut pipeline = ListingPipeline::new(FilterState::default());
        pipeline.apply_fetch_result(Err(AppError::upstream_rate_limited("url", None)));

        assert!(pipeline.status_line().text.contains("60"));
        assert_eq!(
            pipeline.state(),
            &LoadState::Degraded(DegradedReason::RateLimited {
                retry_after_seconds: 60
            })
        );
    }

    #[test]
    fn test_generic_failure_falls_back_to_sample() {
        let mut pipeline = ListingPipeline::new(FilterState::default());
        pipeline.apply_fetch_result(Err(AppError::upstream_unavailable("url", "refused")));

        let frame = pipeline.frame();
        assert_eq!(frame.cards.len(), 3);
        assert!(frame.cards.iter().all(|card| card.is_sample()));
        assert_eq!(frame.status.kind, StatusKind::Error);
        assert!(frame.status.text.contains("Error"));
        assert!(frame.status.text.contains("3 of 3"));
    }

    #[test]
    fn test_search_on_degraded_sample() {
        let mut pipeline = ListingPipeline::new(FilterState::default());
        pipeline.apply_fetch_result(Err(AppError::upstream_http(500, "Internal", "url")));
        pipeline.set_search_term("necro");

        let frame = pipeline.frame();
        assert_eq!(frame.cards.len(), 1);
        assert_eq!(frame.cards[0].title, "Necropolis League");
        assert!(frame.status.text.contains("1 of 3"));
    }

    #[test]
    fn test_empty_success_shows_empty_state() {
        let pipeline = loaded(&[]);
        let frame = pipeline.frame();

        assert!(frame.cards.is_empty());
        assert_eq!(frame.empty_message.as_deref(), Some("No leagues found."));
        assert_eq!(pipeline.snapshot().provenance, Provenance::Live);
    }

    #[test]
    fn test_filters_with_no_match() {
        let mut pipeline = loaded(&["Dawn of the Hunt"]);
        pipeline.set_search_term("delve");

        let frame = pipeline.frame();
        assert!(frame.cards.is_empty());
        assert_eq!(
            frame.empty_message.as_deref(),
            Some("No leagues match the current filters.")
        );
        assert_eq!(frame.status.text, "Showing 0 of 1 leagues");
    }

    #[test]
    fn test_filter_twice_is_identical() {
        let mut pipeline = loaded(&["Dawn of the Hunt", "Endless Delve Event", "Ruthless Race (PL1)"]);
        pipeline.set_category(Category::Event);

        let first = pipeline.frame();
        let second = pipeline.frame();
        assert_eq!(first, second);
        assert_eq!(first.cards.len(), 2);
    }

    #[test]
    fn test_search_editing_rederives() {
        let mut pipeline = loaded(&["Dawn of the Hunt", "Endless Delve Event"]);
        for ch in "delve".chars() {
            pipeline.push_search_char(ch);
        }
        assert_eq!(pipeline.displayed().len(), 1);

        while pipeline.pop_search_char() {}
        assert!(!pipeline.pop_search_char());
        assert_eq!(pipeline.displayed().len(), 2);

        pipeline.cycle_category();
        assert_eq!(pipeline.filter().active_category, Category::Main);
    }

    #[test]
    fn test_refetch_replaces_snapshot() {
        let mut pipeline = ListingPipeline::new(FilterState::default());
        pipeline.apply_fetch_result(Err(AppError::upstream_unavailable("url", "down")));
        assert_eq!(pipeline.snapshot().provenance, Provenance::Sample);

        pipeline.begin_loading();
        pipeline.apply_fetch_result(Ok(vec![TestDataBuilder::league("Dawn of the Hunt")]));
        assert_eq!(pipeline.snapshot().provenance, Provenance::Live);
        assert_eq!(pipeline.snapshot().entries.len(), 1);
    }

    #[test]
    fn test_render_goes_through_sink() {
        let pipeline = loaded(&["Dawn of the Hunt"]);
        let mut view = RecordingView::default();

        pipeline.render(&mut view).unwrap();
        pipeline.render(&mut view).unwrap();

        assert_eq!(view.frames.len(), 2);
        assert_eq!(view.frames[0], view.frames[1]);
        assert_eq!(view.last_titles(), vec!["Dawn of the Hunt"]);
    }
}
