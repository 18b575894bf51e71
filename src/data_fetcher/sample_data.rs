use super::models::{LeagueEntry, LeagueRule};

/// Built-in listing shown when the source cannot be reached.
///
/// Always exactly three entries; the UI tags every card rendered from it.
pub fn sample_leagues() -> Vec<LeagueEntry> {
    vec![
        LeagueEntry {
            id: "Necropolis League".to_string(),
            start_at: Some("2024-03-29T19:00:00Z".to_string()),
            end_at: Some("2024-07-22T21:00:00Z".to_string()),
            description: Some("Raise the dead and sway them with the Lantern of Arimor.".to_string()),
            rules: vec![LeagueRule {
                name: "Haunted Modifiers".to_string(),
                description: Some("Monster packs carry modifiers revealed by the lantern.".to_string()),
            }],
        },
        LeagueEntry {
            id: "Settlers of Kalguur".to_string(),
            start_at: Some("2024-07-26T19:00:00Z".to_string()),
            end_at: None,
            description: Some("Build up Kingsmarch and send shipments across Wraeclast.".to_string()),
            rules: vec![LeagueRule {
                name: "Kingsmarch".to_string(),
                description: None,
            }],
        },
        LeagueEntry {
            id: "Endless Delve Event".to_string(),
            start_at: None,
            end_at: None,
            description: Some("A race to the deepest depths of the Azurite Mine.".to_string()),
            rules: vec![
                LeagueRule {
                    name: "Delve Only".to_string(),
                    description: Some("Every area is replaced with the mine.".to_string()),
                },
                LeagueRule {
                    name: "Hardmode".to_string(),
                    description: None,
                },
            ],
        },
    ]
}
