use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use cinesync_config::ListSyncLevel;
use cinesync_lists::{ListRegistry, ListStatusService, MovieSearch};
use tracing::{debug, info};

use crate::auto_add::process_movie_report;
use crate::clean::clean_library;
use crate::fetch::fetch_list_movies;
use crate::services::{AddMovieService, ExclusionService, ListMovieStore, MovieService};

/// One sync request. A `list_id` of 0 covers every configured list; any
/// other value restricts the cycle to that one list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListSyncCommand {
    pub list_id: i32,
}

/// What a cycle did, for the log line and the CLI exit report.
#[derive(Debug, Default)]
pub struct SyncSummary {
    pub movies_found: usize,
    pub movies_added: usize,
    pub unmonitored: usize,
    pub removed: usize,
    pub any_failure: bool,
    pub duration: Duration,
}

/// The sync engine. Wires the provider registry, the metadata search and
/// the persistence collaborators into one reconciliation cycle.
pub struct ListSyncService {
    registry: Arc<ListRegistry>,
    status: Arc<dyn ListStatusService>,
    search: Arc<dyn MovieSearch>,
    movie_service: Arc<dyn MovieService>,
    add_movie_service: Arc<dyn AddMovieService>,
    exclusion_service: Arc<dyn ExclusionService>,
    list_movie_store: Arc<dyn ListMovieStore>,
    sync_level: ListSyncLevel,
}

impl ListSyncService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        registry: Arc<ListRegistry>,
        status: Arc<dyn ListStatusService>,
        search: Arc<dyn MovieSearch>,
        movie_service: Arc<dyn MovieService>,
        add_movie_service: Arc<dyn AddMovieService>,
        exclusion_service: Arc<dyn ExclusionService>,
        list_movie_store: Arc<dyn ListMovieStore>,
        sync_level: ListSyncLevel,
    ) -> Self {
        Self {
            registry,
            status,
            search,
            movie_service,
            add_movie_service,
            exclusion_service,
            list_movie_store,
            sync_level,
        }
    }

    /// Run one full cycle: fetch, clean, stage, add.
    ///
    /// Cleanup runs only when every consulted provider succeeded and the
    /// cycle covers all lists; a partial or failed picture must never shrink
    /// the library. Auto-add runs regardless of failures, and the add batch
    /// is submitted exactly once per cycle, even when empty. Re-running a
    /// cycle against unchanged lists stages nothing new.
    pub async fn execute(&self, command: ListSyncCommand) -> Result<SyncSummary> {
        let started = Instant::now();
        info!(list_id = command.list_id, "starting list sync");

        let outcome = fetch_list_movies(
            self.registry.as_ref(),
            self.status.as_ref(),
            self.search.as_ref(),
            self.list_movie_store.as_ref(),
            command.list_id,
        )
        .await?;

        let mut summary = SyncSummary {
            movies_found: outcome.movies.len(),
            any_failure: outcome.any_failure,
            ..SyncSummary::default()
        };

        if !self.registry.any_auto_enabled() {
            debug!("no lists with auto add enabled, leaving the library untouched");
            summary.duration = started.elapsed();
            return Ok(summary);
        }

        if command.list_id != 0 {
            debug!(
                list_id = command.list_id,
                "single-list sync, skipping library cleanup"
            );
        } else if outcome.any_failure {
            info!("at least one list failed to fetch, skipping library cleanup");
        } else {
            let cleaned =
                clean_library(self.sync_level, &outcome.movies, self.movie_service.as_ref())
                    .await?;
            summary.unmonitored = cleaned.unmonitored;
            summary.removed = cleaned.removed;
        }

        let exclusions = self.exclusion_service.all_exclusions().await?;

        let mut movies_to_add = Vec::new();
        for report in &outcome.movies {
            let Some(definition) = self.registry.get(report.list_id) else {
                continue;
            };
            process_movie_report(
                self.movie_service.as_ref(),
                definition,
                report,
                &exclusions,
                &mut movies_to_add,
            )
            .await?;
        }

        summary.movies_added = movies_to_add.len();
        info!(
            found = summary.movies_found,
            adding = summary.movies_added,
            "submitting staged movies"
        );
        self.add_movie_service.add_movies(movies_to_add, true).await?;

        summary.duration = started.elapsed();
        info!(
            added = summary.movies_added,
            unmonitored = summary.unmonitored,
            removed = summary.removed,
            any_failure = summary.any_failure,
            elapsed_ms = summary.duration.as_millis() as u64,
            "list sync finished"
        );

        Ok(summary)
    }
}
