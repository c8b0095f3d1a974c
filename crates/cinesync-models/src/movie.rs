use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Earliest release state at which a newly added movie is considered wanted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MinimumAvailability {
    #[default]
    Announced,
    InCinemas,
    Released,
}

/// Options applied once when a movie is first added to the library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMovieOptions {
    pub search_for_movie: bool,
}

/// The canonical persisted movie record.
///
/// Only the persistence layer mutates these; the sync engine hands back
/// explicit update and delete requests instead of sharing references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i32,
    pub tmdb_id: u64,
    pub imdb_id: String,
    pub title: String,
    pub year: u32,
    pub monitored: bool,
    pub root_folder_path: String,
    pub quality_profile_id: i32,
    pub minimum_availability: MinimumAvailability,
    pub tags: HashSet<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_options: Option<AddMovieOptions>,
}
