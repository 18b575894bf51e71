//! Path of Exile 2 League Listing Library
//!
//! This library fetches the PoE2 league listing, drops leagues that are not
//! interesting to browse (SSF, hardcore, voided and the permanent ones),
//! filters what is left by search term and category, and renders the result
//! through a [`view::ViewSink`]. When the source fails it falls back to a small
//! built-in sample set. The [`relay`] module holds the tiny HTTP relay that
//! forwards poe.ninja for browser clients.
//!
//! # Examples
//!
//! ```rust,no_run
//! use poe2_leagues::data_fetcher::{ListingSource, create_http_client};
//! use poe2_leagues::error::AppError;
//! use poe2_leagues::filter::{Category, FilterState};
//! use poe2_leagues::pipeline::load_listing;
//! use poe2_leagues::view::TerminalView;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = create_http_client(None)?;
//!     let source = ListingSource::parse("http://localhost:3000/poe2-leagues");
//!
//!     let pipeline = load_listing(&client, &source, FilterState::new("", Category::Main)).await;
//!     pipeline.render(&mut TerminalView::new(std::io::stdout()))?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod filter;
pub mod logging;
pub mod pipeline;
pub mod relay;
pub mod testing_utils;
pub mod ui;
pub mod view;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{LeagueEntry, ListingSource, fetch_listing};
pub use error::AppError;
pub use filter::{Category, FilterState};
pub use pipeline::{ListingPipeline, LoadState, Provenance, load_listing};
pub use view::{ViewFrame, ViewSink};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
