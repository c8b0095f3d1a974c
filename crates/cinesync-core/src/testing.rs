// Shared fakes for the engine tests. Call recording uses std mutexes; the
// fakes never hold a lock across an await.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cinesync_lists::{ImportList, ListDefinition, ListError, ListStatusService, MovieSearch};
use cinesync_models::{ListExclusion, ListMovie, ListStatus, Movie};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn list_definition(id: i32, enable_auto: bool) -> ListDefinition {
    ListDefinition {
        id,
        name: format!("list-{}", id),
        enabled: true,
        enable_auto,
        root_folder_path: "/movies".to_string(),
        quality_profile_id: 1,
        should_monitor: true,
        ..ListDefinition::default()
    }
}

pub fn list_movie_with_tmdb(tmdb_id: u64) -> ListMovie {
    ListMovie {
        tmdb_id,
        title: format!("Movie {}", tmdb_id),
        ..ListMovie::default()
    }
}

pub fn library_movie(id: i32, tmdb_id: u64, imdb_id: &str) -> Movie {
    Movie {
        id,
        tmdb_id,
        imdb_id: imdb_id.to_string(),
        title: format!("Library {}", id),
        monitored: true,
        ..Movie::default()
    }
}

enum FetchBehavior {
    Return(Vec<ListMovie>),
    Fail,
    Panic,
}

pub struct FakeList {
    definition: ListDefinition,
    behavior: FetchBehavior,
}

impl FakeList {
    pub fn returning(definition: ListDefinition, movies: Vec<ListMovie>) -> Self {
        Self {
            definition,
            behavior: FetchBehavior::Return(movies),
        }
    }

    pub fn failing(definition: ListDefinition) -> Self {
        Self {
            definition,
            behavior: FetchBehavior::Fail,
        }
    }

    pub fn never_fetched(definition: ListDefinition) -> Self {
        Self {
            definition,
            behavior: FetchBehavior::Panic,
        }
    }
}

#[async_trait]
impl ImportList for FakeList {
    fn definition(&self) -> &ListDefinition {
        &self.definition
    }

    async fn fetch(&self) -> Result<Vec<ListMovie>, ListError> {
        match &self.behavior {
            FetchBehavior::Return(movies) => Ok(movies.clone()),
            FetchBehavior::Fail => Err(ListError::Remote("list is down".to_string())),
            FetchBehavior::Panic => panic!("fetch called on a blocked provider"),
        }
    }
}

#[derive(Default)]
pub struct FakeStatus {
    blocked: Vec<ListStatus>,
}

impl FakeStatus {
    pub fn blocking(provider_id: i32, till: DateTime<Utc>) -> Self {
        Self {
            blocked: vec![ListStatus {
                provider_id,
                consecutive_failures: 3,
                disabled_till: Some(till),
            }],
        }
    }
}

impl ListStatusService for FakeStatus {
    fn blocked_providers(&self) -> Vec<ListStatus> {
        self.blocked.clone()
    }

    fn record_success(&self, _provider_id: i32) {}

    fn record_failure(&self, _provider_id: i32) {}
}

/// Mapping always misses; items pass through with their raw fields.
pub struct NullSearch;

#[async_trait]
impl MovieSearch for NullSearch {
    async fn map_to_canonical(&self, _partial: &ListMovie) -> Option<ListMovie> {
        None
    }
}

#[derive(Default)]
pub struct FakeListMovieStore {
    synced: Mutex<Vec<(usize, i32)>>,
}

impl FakeListMovieStore {
    pub fn synced(&self) -> Vec<(usize, i32)> {
        self.synced.lock().unwrap().clone()
    }
}

#[async_trait]
impl crate::services::ListMovieStore for FakeListMovieStore {
    async fn sync_movies_for_list(&self, movies: Vec<ListMovie>, list_id: i32) -> Result<()> {
        self.synced.lock().unwrap().push((movies.len(), list_id));
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeMovieService {
    pub library: Mutex<Vec<Movie>>,
    pub get_all_calls: AtomicUsize,
    pub update_calls: Mutex<Vec<(Vec<Movie>, bool)>>,
    pub delete_calls: Mutex<Vec<(i32, bool)>>,
}

impl FakeMovieService {
    pub fn with_library(movies: Vec<Movie>) -> Arc<Self> {
        Arc::new(Self {
            library: Mutex::new(movies),
            ..Self::default()
        })
    }

    pub fn get_all_count(&self) -> usize {
        self.get_all_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> Vec<(Vec<Movie>, bool)> {
        self.update_calls.lock().unwrap().clone()
    }

    pub fn delete_calls(&self) -> Vec<(i32, bool)> {
        self.delete_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl crate::services::MovieService for FakeMovieService {
    async fn get_all_movies(&self) -> Result<Vec<Movie>> {
        self.get_all_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.library.lock().unwrap().clone())
    }

    async fn find_by_tmdb_id(&self, tmdb_id: u64) -> Result<Option<Movie>> {
        Ok(self
            .library
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.tmdb_id == tmdb_id)
            .cloned())
    }

    async fn update_movies(&self, movies: Vec<Movie>, notify: bool) -> Result<()> {
        self.update_calls.lock().unwrap().push((movies, notify));
        Ok(())
    }

    async fn delete_movie(&self, id: i32, delete_files: bool) -> Result<()> {
        self.delete_calls.lock().unwrap().push((id, delete_files));
        self.library.lock().unwrap().retain(|m| m.id != id);
        Ok(())
    }
}

/// Records add batches and inserts them into the backing library, so
/// repeated cycles observe their own additions.
pub struct FakeAddService {
    pub movie_service: Arc<FakeMovieService>,
    pub calls: Mutex<Vec<(Vec<Movie>, bool)>>,
}

impl FakeAddService {
    pub fn new(movie_service: Arc<FakeMovieService>) -> Self {
        Self {
            movie_service,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Vec<Movie>, bool)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl crate::services::AddMovieService for FakeAddService {
    async fn add_movies(&self, movies: Vec<Movie>, search_immediately: bool) -> Result<()> {
        let mut library = self.movie_service.library.lock().unwrap();
        let next_id = library.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        for (offset, mut movie) in movies.clone().into_iter().enumerate() {
            movie.id = next_id + offset as i32;
            library.push(movie);
        }
        drop(library);

        self.calls.lock().unwrap().push((movies, search_immediately));
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeExclusions {
    pub exclusions: Vec<ListExclusion>,
}

impl FakeExclusions {
    pub fn excluding(tmdb_ids: &[u64]) -> Self {
        Self {
            exclusions: tmdb_ids
                .iter()
                .map(|&tmdb_id| ListExclusion {
                    tmdb_id,
                    movie_title: None,
                    movie_year: None,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl crate::services::ExclusionService for FakeExclusions {
    async fn all_exclusions(&self) -> Result<Vec<ListExclusion>> {
        Ok(self.exclusions.clone())
    }
}
