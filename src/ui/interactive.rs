//! Interactive terminal listing.
//!
//! The fetch runs in a background task while the user can already type; until
//! it lands, filtering works against the empty snapshot.

use crate::constants::ui::POLL_INTERVAL_MS;
use crate::data_fetcher::{ListingSource, fetch_listing, models::LeagueEntry};
use crate::error::AppError;
use crate::filter::FilterState;
use crate::pipeline::ListingPipeline;
use crate::view::{TerminalView, ViewSink};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use reqwest::Client;
use std::io::{Stdout, stdout};
use std::time::Duration;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, info, warn};

/// What a key press did to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Quit,
    Changed,
    Ignored,
}

/// Applies one key press to the filter state of `pipeline`.
pub fn handle_key(pipeline: &mut ListingPipeline, key: &KeyEvent) -> KeyOutcome {
    if key.kind != KeyEventKind::Press {
        return KeyOutcome::Ignored;
    }

    match key.code {
        KeyCode::Esc => KeyOutcome::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyOutcome::Quit,
        KeyCode::Tab => {
            pipeline.cycle_category();
            debug!("Category changed to {}", pipeline.filter().active_category);
            KeyOutcome::Changed
        }
        KeyCode::Backspace => {
            if pipeline.pop_search_char() {
                KeyOutcome::Changed
            } else {
                KeyOutcome::Ignored
            }
        }
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            pipeline.push_search_char(ch);
            KeyOutcome::Changed
        }
        _ => KeyOutcome::Ignored,
    }
}

/// Runs the interactive listing until the user quits.
pub async fn run_interactive_ui(
    client: Client,
    source: ListingSource,
    filter: FilterState,
) -> Result<(), AppError> {
    let mut stdout = setup_terminal()?;
    let result = event_loop(&mut stdout, client, source, filter).await;
    cleanup_terminal(&mut stdout)?;
    result
}

fn setup_terminal() -> Result<Stdout, AppError> {
    let mut stdout = stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;
    Ok(stdout)
}

fn cleanup_terminal(stdout: &mut Stdout) -> Result<(), AppError> {
    execute!(stdout, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

async fn event_loop(
    stdout: &mut Stdout,
    client: Client,
    source: ListingSource,
    filter: FilterState,
) -> Result<(), AppError> {
    let mut pipeline = ListingPipeline::new(filter);
    let mut view = TerminalView::fullscreen(stdout);

    let (tx, mut rx) = oneshot::channel::<Result<Vec<LeagueEntry>, AppError>>();
    pipeline.begin_loading();
    tokio::spawn(async move {
        let result = fetch_listing(&client, &source).await;
        if tx.send(result).is_err() {
            debug!("Listing arrived after the UI closed");
        }
    });

    let mut fetch_pending = true;
    let mut needs_render = true;

    loop {
        if fetch_pending {
            match rx.try_recv() {
                Ok(result) => {
                    pipeline.apply_fetch_result(result);
                    fetch_pending = false;
                    needs_render = true;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Closed) => {
                    warn!("Fetch task ended without a result");
                    pipeline.apply_fetch_result(Err(AppError::upstream_unavailable(
                        "fetch task",
                        "task ended without a result",
                    )));
                    fetch_pending = false;
                    needs_render = true;
                }
            }
        }

        if needs_render {
            view.render(&pipeline.frame())?;
            needs_render = false;
        }

        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            match event::read()? {
                Event::Key(key) => match handle_key(&mut pipeline, &key) {
                    KeyOutcome::Quit => {
                        info!("User quit the interactive listing");
                        return Ok(());
                    }
                    KeyOutcome::Changed => needs_render = true,
                    KeyOutcome::Ignored => {}
                },
                Event::Resize(_, _) => needs_render = true,
                _ => {}
            }
        }

        tokio::task::yield_now().await;
    }
}
