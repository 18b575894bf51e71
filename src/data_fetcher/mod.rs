pub mod fetch_utils;
pub mod http_client;
pub mod models;
pub mod processors;
pub mod sample_data;

pub use fetch_utils::{ListingSource, fetch_listing};
pub use http_client::create_http_client;
pub use models::{LeagueEntry, LeagueRule, ListingPayload};
pub use processors::normalize_leagues;
pub use sample_data::sample_leagues;
