use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Release lifecycle of a movie as reported by the metadata source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MovieStatus {
    #[default]
    Tba,
    Announced,
    InCinemas,
    Released,
}

/// Community rating aggregate carried over from the metadata source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieRatings {
    pub votes: u32,
    pub value: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoverType {
    Poster,
    Fanart,
    Banner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaCover {
    pub cover_type: CoverType,
    pub url: String,
}

/// A movie as reported by an external list.
///
/// Created per fetch cycle and discarded after it: an item either becomes a
/// library `Movie` or is dropped. `tmdb_id == 0` and an empty `imdb_id` mean
/// the respective identifier is absent. The enrichment fields are filled in
/// by the metadata mapper when a canonical match is found; after a successful
/// map the identity fields reflect the canonical record, not the raw list
/// payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListMovie {
    pub tmdb_id: u64,
    pub imdb_id: String,
    pub title: String,
    pub sort_title: String,
    pub year: u32,
    /// Id of the list definition this item was fetched from.
    pub list_id: i32,

    pub overview: String,
    pub studio: String,
    pub certification: String,
    pub status: MovieStatus,
    pub ratings: MovieRatings,
    pub images: Vec<MediaCover>,
    pub website: String,
    pub youtube_trailer_id: String,
    pub in_cinemas: Option<DateTime<Utc>>,
    pub physical_release: Option<DateTime<Utc>>,
    pub digital_release: Option<DateTime<Utc>>,
    pub genres: Vec<String>,
}
