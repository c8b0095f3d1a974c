use anyhow::Result;
use cinesync_lists::{ListRegistry, ListStatusService, MovieSearch};
use cinesync_models::{ListMovie, ListStatus};
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::identity::dedup_list_movies;
use crate::mapper::map_movie_report;
use crate::services::ListMovieStore;

/// Aggregate result of one fetch pass over all providers.
pub struct FetchOutcome {
    /// Deduplicated items from every successful provider, tagged with their
    /// origin list id, in provider configuration order.
    pub movies: Vec<ListMovie>,
    /// True if ANY consulted provider failed or was blocked. Gates the
    /// cleanup step: the library is never cleaned against an incomplete
    /// picture of the external lists.
    pub any_failure: bool,
}

/// Fetch every enabled, non-blocked provider, enrich and tag the items, and
/// dedup across providers (first occurrence wins).
///
/// Provider failures are contained here: they are logged, reported to the
/// health tracker and folded into `any_failure`. Only failures of the
/// list-movie read model store propagate.
pub async fn fetch_list_movies(
    registry: &ListRegistry,
    status: &dyn ListStatusService,
    search: &dyn MovieSearch,
    list_movie_store: &dyn ListMovieStore,
    target_list_id: i32,
) -> Result<FetchOutcome> {
    let mut movies = Vec::new();
    let mut any_failure = false;

    let blocked: HashMap<i32, ListStatus> = status
        .blocked_providers()
        .into_iter()
        .map(|s| (s.provider_id, s))
        .collect();

    for list in registry.available_providers() {
        let definition = list.definition().clone();

        if target_list_id != 0 && definition.id != target_list_id {
            continue;
        }

        if let Some(blocked_status) = blocked.get(&definition.id) {
            debug!(
                list = %definition.name,
                disabled_till = ?blocked_status.disabled_till,
                "temporarily ignoring list due to recent failures"
            );
            // A blocked list counts as failed so we never clean against a
            // partial picture.
            any_failure = true;
            continue;
        }

        match list.fetch().await {
            Ok(mut fetched) => {
                for movie in fetched.iter_mut() {
                    map_movie_report(search, movie).await;
                    movie.list_id = definition.id;
                }

                status.record_success(definition.id);
                list_movie_store
                    .sync_movies_for_list(fetched.clone(), definition.id)
                    .await?;
                movies.extend(fetched);
            }
            Err(e) => {
                warn!(list = %definition.name, error = %e, "list fetch failed");
                status.record_failure(definition.id);
                any_failure = true;
            }
        }
    }

    debug!(found = movies.len(), any_failure, "collected movies from lists");

    Ok(FetchOutcome {
        movies: dedup_list_movies(movies),
        any_failure,
    })
}
