use serde::{Deserialize, Serialize};

/// A durable "never auto-add this title" entry keyed by TMDB id.
///
/// Title and year are advisory, kept so the entry stays readable after the
/// movie itself is long gone from every list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListExclusion {
    pub tmdb_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_year: Option<u32>,
}
