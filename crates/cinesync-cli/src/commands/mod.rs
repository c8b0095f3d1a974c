pub mod daemon;
pub mod sync;

use anyhow::Result;
use async_trait::async_trait;
use cinesync_config::{Config, PathManager};
use cinesync_core::ListSyncService;
use cinesync_lists::{build_registry, ListStatusTracker, MovieSearch, TmdbMovieSearch};
use cinesync_models::ListMovie;
use std::sync::Arc;
use tracing::warn;

use crate::store::JsonLibraryStore;

/// Used when no TMDB key is configured: list items keep their raw fields.
struct NoMetadataSearch;

#[async_trait]
impl MovieSearch for NoMetadataSearch {
    async fn map_to_canonical(&self, _partial: &ListMovie) -> Option<ListMovie> {
        None
    }
}

/// Wire the engine from configuration and the standalone JSON store.
pub fn build_service(config: &Config, paths: &PathManager) -> Result<ListSyncService> {
    paths.ensure_directories()?;

    let client = reqwest::Client::builder()
        .user_agent(concat!("cinesync/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let registry = Arc::new(build_registry(config, client.clone()));

    let search: Arc<dyn MovieSearch> = match &config.tmdb {
        Some(tmdb) => Arc::new(TmdbMovieSearch::new(client, tmdb.api_key.clone())),
        None => {
            warn!("no TMDB api key configured, list items will not be enriched");
            Arc::new(NoMetadataSearch)
        }
    };

    let store = Arc::new(JsonLibraryStore::new(
        paths.library_file(),
        paths.exclusions_file(),
        paths.list_movies_dir(),
    ));

    Ok(ListSyncService::new(
        registry,
        Arc::new(ListStatusTracker::default()),
        search,
        store.clone(),
        store.clone(),
        store.clone(),
        store,
        config.sync.list_sync_level,
    ))
}
