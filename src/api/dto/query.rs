//! Query string parameters.

use serde::Deserialize;

/// `?includeTalks=true|false`, defaulting to `false`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludeTalksQuery {
    #[serde(default)]
    pub include_talks: bool,
}

/// Parameters of `GET /api/camps/search`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Raw date; parsed leniently by the handler. Absent means `0001-01-01`.
    pub the_date: Option<String>,

    #[serde(default)]
    pub include_talks: bool,
}
