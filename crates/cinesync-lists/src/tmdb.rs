use async_trait::async_trait;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use cinesync_models::{CoverType, ListMovie, MediaCover, MovieRatings, MovieStatus};
use serde::Deserialize;
use tracing::{debug, warn};

const BASE_URL: &str = "https://api.themoviedb.org/3";
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/original";

/// Metadata search used by the mapper to turn a bare list entry into a
/// canonical movie record. `None` is a mapping miss, not an error; the
/// caller keeps the raw fields.
#[async_trait]
pub trait MovieSearch: Send + Sync {
    async fn map_to_canonical(&self, partial: &ListMovie) -> Option<ListMovie>;
}

pub struct TmdbMovieSearch {
    client: reqwest::Client,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct TmdbMovie {
    id: u64,
    title: String,
    #[serde(default)]
    imdb_id: Option<String>,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    vote_average: f32,
    #[serde(default)]
    vote_count: u32,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    backdrop_path: Option<String>,
    #[serde(default)]
    genres: Option<Vec<TmdbGenre>>,
    #[serde(default)]
    homepage: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbGenre {
    name: String,
}

#[derive(Debug, Deserialize)]
struct FindResponse {
    #[serde(default)]
    movie_results: Vec<TmdbMovie>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<TmdbMovie>,
}

impl TmdbMovieSearch {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> anyhow::Result<T> {
        let url = format!("{}{}", BASE_URL, path);
        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("tmdb answered {} for {}", status, path);
        }

        Ok(response.json().await?)
    }

    async fn lookup_by_tmdb_id(&self, tmdb_id: u64) -> anyhow::Result<Option<TmdbMovie>> {
        let movie = self
            .get_json::<TmdbMovie>(&format!("/movie/{}", tmdb_id), &[])
            .await?;
        Ok(Some(movie))
    }

    async fn lookup_by_imdb_id(&self, imdb_id: &str) -> anyhow::Result<Option<TmdbMovie>> {
        let found: FindResponse = self
            .get_json(
                &format!("/find/{}", imdb_id),
                &[("external_source", "imdb_id")],
            )
            .await?;
        Ok(found.movie_results.into_iter().next())
    }

    async fn lookup_by_title(
        &self,
        title: &str,
        year: u32,
    ) -> anyhow::Result<Option<TmdbMovie>> {
        let year_string = year.to_string();
        let mut query: Vec<(&str, &str)> = vec![("query", title)];
        if year != 0 {
            query.push(("year", year_string.as_str()));
        }

        let found: SearchResponse = self.get_json("/search/movie", &query).await?;
        Ok(found.results.into_iter().next())
    }
}

#[async_trait]
impl MovieSearch for TmdbMovieSearch {
    async fn map_to_canonical(&self, partial: &ListMovie) -> Option<ListMovie> {
        let lookup = if partial.tmdb_id != 0 {
            self.lookup_by_tmdb_id(partial.tmdb_id).await
        } else if !partial.imdb_id.is_empty() {
            self.lookup_by_imdb_id(&partial.imdb_id).await
        } else if !partial.title.is_empty() {
            self.lookup_by_title(&partial.title, partial.year).await
        } else {
            return None;
        };

        match lookup {
            Ok(Some(movie)) => {
                let mut canonical = into_list_movie(movie);
                // Find and search endpoints omit the imdb id; keep the one
                // the list reported rather than blanking it.
                if canonical.imdb_id.is_empty() {
                    canonical.imdb_id = partial.imdb_id.clone();
                }
                Some(canonical)
            }
            Ok(None) => {
                debug!(
                    tmdb_id = partial.tmdb_id,
                    imdb_id = %partial.imdb_id,
                    title = %partial.title,
                    "no tmdb match for list entry"
                );
                None
            }
            Err(e) => {
                warn!(
                    tmdb_id = partial.tmdb_id,
                    title = %partial.title,
                    error = %e,
                    "tmdb lookup failed, keeping raw list entry"
                );
                None
            }
        }
    }
}

fn into_list_movie(movie: TmdbMovie) -> ListMovie {
    let release = movie.release_date.as_deref().and_then(parse_release_date);

    let mut images = Vec::new();
    if let Some(poster) = movie.poster_path {
        images.push(MediaCover {
            cover_type: CoverType::Poster,
            url: format!("{}{}", IMAGE_BASE_URL, poster),
        });
    }
    if let Some(backdrop) = movie.backdrop_path {
        images.push(MediaCover {
            cover_type: CoverType::Fanart,
            url: format!("{}{}", IMAGE_BASE_URL, backdrop),
        });
    }

    ListMovie {
        tmdb_id: movie.id,
        imdb_id: movie.imdb_id.unwrap_or_default(),
        sort_title: movie.title.to_lowercase(),
        title: movie.title,
        year: release.map(|d| d.year() as u32).unwrap_or(0),
        overview: movie.overview.unwrap_or_default(),
        status: parse_status(movie.status.as_deref()),
        ratings: MovieRatings {
            votes: movie.vote_count,
            value: movie.vote_average,
        },
        images,
        website: movie.homepage.unwrap_or_default(),
        in_cinemas: release,
        genres: movie
            .genres
            .unwrap_or_default()
            .into_iter()
            .map(|g| g.name)
            .collect(),
        ..ListMovie::default()
    }
}

fn parse_release_date(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|d| d.and_utc())
}

fn parse_status(raw: Option<&str>) -> MovieStatus {
    match raw {
        Some("Released") => MovieStatus::Released,
        Some("In Production") | Some("Post Production") | Some("Planned") => {
            MovieStatus::Announced
        }
        _ => MovieStatus::Tba,
    }
}
