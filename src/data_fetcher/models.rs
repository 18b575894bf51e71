use serde::{Deserialize, Deserializer, Serialize};

/// A single league rule (mod) as listed by the leagues API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueRule {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One league in the listing. `id` doubles as the display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueEntry {
    pub id: String,
    #[serde(rename = "startAt", default)]
    pub start_at: Option<String>,
    #[serde(rename = "endAt", default)]
    pub end_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rules: Vec<LeagueRule>,
}

/// Row of the static mock file (`{ "lines": [...] }`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockLine {
    pub name: String,
    #[serde(rename = "startAt", default)]
    pub start_at: Option<String>,
    #[serde(rename = "endAt", default)]
    pub end_at: Option<String>,
    #[serde(rename = "charactersCreated", default)]
    pub characters_created: u64,
}

/// League reference inside the poe.ninja builds payload forwarded by the relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildsLeague {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Accepted listing payload shapes.
///
/// The leagues API returns a bare array; the bundled mock file wraps its rows
/// in a `lines` object; the relay forwards the poe.ninja builds object, whose
/// `leagues` list only names each league. Anything else is rejected as
/// malformed.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListingPayload {
    Leagues(Vec<LeagueEntry>),
    Lines { lines: Vec<MockLine> },
    Builds { leagues: Vec<BuildsLeague> },
}

impl ListingPayload {
    /// Converts the payload into league entries, keeping source order.
    pub fn into_entries(self) -> Vec<LeagueEntry> {
        match self {
            ListingPayload::Leagues(leagues) => leagues,
            ListingPayload::Lines { lines } => lines.into_iter().map(LeagueEntry::from).collect(),
            ListingPayload::Builds { leagues } => {
                leagues.into_iter().map(LeagueEntry::from).collect()
            }
        }
    }
}

impl From<MockLine> for LeagueEntry {
    fn from(line: MockLine) -> Self {
        LeagueEntry {
            id: line.name,
            start_at: line.start_at,
            end_at: line.end_at,
            description: Some(format!(
                "Characters created: {}",
                format_thousands(line.characters_created)
            )),
            rules: Vec::new(),
        }
    }
}

impl From<BuildsLeague> for LeagueEntry {
    fn from(league: BuildsLeague) -> Self {
        LeagueEntry {
            id: league.name,
            start_at: None,
            end_at: None,
            description: None,
            rules: Vec::new(),
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Formats a count with comma thousands separators (`1234567` -> `1,234,567`).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
