use anyhow::Result;
use cinesync_config::ListSyncLevel;
use cinesync_models::ListMovie;
use tracing::{debug, info};

use crate::identity::is_still_listed;
use crate::services::MovieService;

/// What a cleanup pass did, for the cycle summary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanSummary {
    pub logged: usize,
    pub unmonitored: usize,
    pub removed: usize,
}

/// Reconcile the library against the full set of fetched list items.
///
/// Every library movie that no list still mentions is handled per the
/// configured level. Deletes are issued one movie at a time, as soon as the
/// movie is found unlisted; the unmonitor updates are batched and flushed in
/// a single call at the end. The batched update is always issued, empty or
/// not, so the store can refresh its derived state every pass.
pub async fn clean_library(
    level: ListSyncLevel,
    list_movies: &[ListMovie],
    movie_service: &dyn MovieService,
) -> Result<CleanSummary> {
    if level == ListSyncLevel::Disabled {
        return Ok(CleanSummary::default());
    }

    let library = movie_service.get_all_movies().await?;
    let mut summary = CleanSummary::default();
    let mut to_update = Vec::new();

    for movie in library {
        if is_still_listed(&movie, list_movies) {
            continue;
        }

        match level {
            ListSyncLevel::Disabled => unreachable!(),
            ListSyncLevel::LogOnly => {
                info!(movie = %movie.title, "movie is not on any list");
                summary.logged += 1;
            }
            ListSyncLevel::KeepAndUnmonitor if movie.monitored => {
                info!(movie = %movie.title, "unmonitoring movie, not on any list");
                let mut movie = movie;
                movie.monitored = false;
                to_update.push(movie);
                summary.unmonitored += 1;
            }
            ListSyncLevel::KeepAndUnmonitor => {}
            ListSyncLevel::RemoveAndKeep => {
                info!(movie = %movie.title, "removing movie from library, keeping files");
                movie_service.delete_movie(movie.id, false).await?;
                summary.removed += 1;
            }
            ListSyncLevel::RemoveAndDelete => {
                info!(movie = %movie.title, "removing movie and deleting files");
                movie_service.delete_movie(movie.id, true).await?;
                summary.removed += 1;
            }
        }
    }

    debug!(
        unmonitored = summary.unmonitored,
        removed = summary.removed,
        "flushing library cleanup"
    );
    movie_service.update_movies(to_update, true).await?;

    Ok(summary)
}
