use anyhow::Result;
use async_trait::async_trait;
use cinesync_models::{ListExclusion, ListMovie, Movie};

/// Library store. The engine never mutates movies in place; it reads them,
/// then hands back explicit update and delete requests. A store failure
/// propagates and fails the cycle (unlike provider failures, which are
/// contained in the aggregator).
#[async_trait]
pub trait MovieService: Send + Sync {
    async fn get_all_movies(&self) -> Result<Vec<Movie>>;
    async fn find_by_tmdb_id(&self, tmdb_id: u64) -> Result<Option<Movie>>;
    /// Bulk update, treated as one atomic unit by the store. An empty batch
    /// must be accepted as a no-op.
    async fn update_movies(&self, movies: Vec<Movie>, notify: bool) -> Result<()>;
    async fn delete_movie(&self, id: i32, delete_files: bool) -> Result<()>;
}

/// Staged additions go through here, once per cycle, even when empty.
#[async_trait]
pub trait AddMovieService: Send + Sync {
    async fn add_movies(&self, movies: Vec<Movie>, search_immediately: bool) -> Result<()>;
}

#[async_trait]
pub trait ExclusionService: Send + Sync {
    async fn all_exclusions(&self) -> Result<Vec<ListExclusion>>;
}

/// Keeps the per-list read model (the listing UI) in step with the latest
/// successful fetch of each provider.
#[async_trait]
pub trait ListMovieStore: Send + Sync {
    async fn sync_movies_for_list(&self, movies: Vec<ListMovie>, list_id: i32) -> Result<()>;
}
