//! Application-wide constants and configuration values
//!
//! This module centralizes the fixed names, URLs and placeholder strings used
//! by the relay and the listing pipeline.

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Relay server constants
pub mod relay {
    /// Address the relay binds to. Fixed, not read from the environment.
    pub const LISTEN_ADDR: &str = "0.0.0.0:3000";

    /// Port the relay listens on, used when printing the local URL
    pub const LISTEN_PORT: u16 = 3000;

    /// Local path the relay answers on
    pub const LISTING_PATH: &str = "/poe2-leagues";

    /// The one upstream URL the relay forwards to
    pub const UPSTREAM_URL: &str = "https://poe.ninja/api/data/builds?game=poe2";

    /// Browser-like user agent; poe.ninja rejects requests without one
    pub const SPOOFED_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

    /// Message returned in the `{ "error": ... }` envelope on any failure
    pub const FAILURE_MESSAGE: &str = "Failed to fetch PoE2 Ninja data";
}

/// Listing source defaults
pub mod source {
    /// Default listing source: the local relay endpoint
    pub const DEFAULT_SOURCE: &str = "http://localhost:3000/poe2-leagues";
}

/// League normalization rules
pub mod leagues {
    /// Entries whose id contains any of these (case-insensitive) are dropped
    pub const BLOCKED_SUBSTRINGS: [&str; 3] = ["ssf", "hardcore", "voided"];

    /// Entries whose id equals one of these exactly are dropped
    pub const RESERVED_NAMES: [&str; 2] = ["Standard", "Solo Self-Found"];

    /// Marker for permanent/main challenge leagues (case-insensitive)
    pub const MAIN_MARKER: &str = "league";

    /// Markers for events and races (case-insensitive)
    pub const EVENT_MARKERS: [&str; 2] = ["event", "race"];
}

/// Rate limit handling
pub mod rate_limit {
    /// Seconds shown to the user when a 429 response carries no Retry-After
    pub const DEFAULT_RETRY_AFTER_SECONDS: u64 = 60;
}

/// Placeholder strings used while rendering cards
pub mod placeholders {
    /// Missing start date on live data
    pub const START_LIVE: &str = "TBA";

    /// Missing start date on sample data
    pub const START_SAMPLE: &str = "N/A";

    /// Missing end date
    pub const END_MISSING: &str = "Ongoing";

    /// Rule without a description
    pub const RULE_DESCRIPTION: &str = "No description available.";

    /// Shown when a successful fetch produced no leagues
    pub const EMPTY_STATE: &str = "No leagues found.";

    /// Badge attached to every card rendered from the built-in sample set
    pub const SAMPLE_BADGE: &str = "Sample data";
}

/// UI constants
pub mod ui {
    /// Page title used by the terminal and HTML views
    pub const TITLE: &str = "PoE2 Available Leagues";

    /// Event polling interval for the interactive mode (milliseconds)
    pub const POLL_INTERVAL_MS: u64 = 100;

    /// Terminal width used when not attached to a real terminal
    pub const FALLBACK_WIDTH: u16 = 80;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for listing source override
    pub const SOURCE: &str = "POE2_LEAGUES_SOURCE";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "POE2_LEAGUES_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "POE2_LEAGUES_HTTP_TIMEOUT";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_list_is_lowercase() {
        // Matching lowercases the id, so the needles must already be lowercase
        for needle in leagues::BLOCKED_SUBSTRINGS {
            assert_eq!(needle, needle.to_lowercase());
        }
        for marker in leagues::EVENT_MARKERS {
            assert_eq!(marker, marker.to_lowercase());
        }
        assert_eq!(leagues::MAIN_MARKER, leagues::MAIN_MARKER.to_lowercase());
    }

    #[test]
    fn test_default_source_points_at_relay() {
        assert!(source::DEFAULT_SOURCE.ends_with(relay::LISTING_PATH));
        assert!(source::DEFAULT_SOURCE.contains(&relay::LISTEN_PORT.to_string()));
        assert!(relay::LISTEN_ADDR.ends_with(&relay::LISTEN_PORT.to_string()));
    }
}
