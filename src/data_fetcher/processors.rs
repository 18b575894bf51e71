//! Normalization of fetched league listings

use super::models::LeagueEntry;
use crate::constants::leagues::{BLOCKED_SUBSTRINGS, RESERVED_NAMES};
use tracing::debug;

/// True if the id contains any block-listed substring, ignoring case.
pub fn is_blocked(id: &str) -> bool {
    let id = id.to_lowercase();
    BLOCKED_SUBSTRINGS.iter().any(|needle| id.contains(needle))
}

/// True if the id is one of the reserved permanent league names (exact match).
pub fn is_reserved(id: &str) -> bool {
    RESERVED_NAMES.contains(&id)
}

/// Drops block-listed and reserved leagues. Order of the rest is kept.
pub fn normalize_leagues(entries: Vec<LeagueEntry>) -> Vec<LeagueEntry> {
    let total = entries.len();
    let kept: Vec<LeagueEntry> = entries
        .into_iter()
        .filter(|entry| !is_blocked(&entry.id) && !is_reserved(&entry.id))
        .collect();
    debug!("Normalized listing: kept {} of {} leagues", kept.len(), total);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_is_blocked_case_insensitive() {
        assert!(is_blocked("SSF Dawn of the Hunt"));
        assert!(is_blocked("HC SSF Dawn of the Hunt"));
        assert!(is_blocked("Hardcore"));
        assert!(is_blocked("HARDCORE Dawn of the Hunt"));
        assert!(is_blocked("Dawn of the Hunt (Voided)"));
        assert!(!is_blocked("Dawn of the Hunt"));
        assert!(!is_blocked("Standard"));
    }

    #[test]
    fn test_is_reserved_exact_only() {
        assert!(is_reserved("Standard"));
        assert!(is_reserved("Solo Self-Found"));
        assert!(!is_reserved("standard"));
        assert!(!is_reserved("Standard Event"));
    }

    #[test]
    fn test_normalize_counts_and_order() {
        let ids = [
            "Standard",
            "Dawn of the Hunt",
            "Hardcore",
            "Solo Self-Found",
            "SSF Dawn of the Hunt",
            "Endless Delve Event",
            "Old Race (Voided)",
            "Necropolis League",
        ];
        let input: Vec<LeagueEntry> = ids.iter().map(|id| TestDataBuilder::league(id)).collect();

        let output = normalize_leagues(input);

        let kept: Vec<&str> = output.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            kept,
            vec!["Dawn of the Hunt", "Endless Delve Event", "Necropolis League"]
        );

        let blocked = ids.iter().filter(|id| is_blocked(id)).count();
        let reserved = ids
            .iter()
            .filter(|id| !is_blocked(id) && is_reserved(id))
            .count();
        assert_eq!(output.len(), ids.len() - blocked - reserved);
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize_leagues(Vec::new()).is_empty());
    }
}
