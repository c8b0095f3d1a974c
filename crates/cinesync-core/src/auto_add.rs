use anyhow::Result;
use cinesync_lists::ListDefinition;
use cinesync_models::{AddMovieOptions, ListExclusion, ListMovie, Movie};
use tracing::debug;

use crate::services::MovieService;

/// Decide whether one fetched item becomes a staged addition.
///
/// An item is staged only when it carries a TMDB id, its origin list has
/// auto-add enabled, it is not already in the library, not excluded, and not
/// already staged this cycle. The staged record inherits the list's add
/// defaults; the monitor flag doubles as the search-on-add flag.
pub async fn process_movie_report(
    movie_service: &dyn MovieService,
    definition: &ListDefinition,
    report: &ListMovie,
    exclusions: &[ListExclusion],
    movies_to_add: &mut Vec<Movie>,
) -> Result<()> {
    if report.tmdb_id == 0 {
        return Ok(());
    }

    if !definition.enable_auto {
        debug!(
            movie = %report.title,
            list = %definition.name,
            "auto-add disabled for list, skipping"
        );
        return Ok(());
    }

    if movie_service.find_by_tmdb_id(report.tmdb_id).await?.is_some() {
        return Ok(());
    }

    if exclusions.iter().any(|e| e.tmdb_id == report.tmdb_id) {
        debug!(movie = %report.title, tmdb_id = report.tmdb_id, "movie is excluded, skipping");
        return Ok(());
    }

    if movies_to_add.iter().any(|m| m.tmdb_id == report.tmdb_id) {
        return Ok(());
    }

    let monitored = definition.should_monitor;
    movies_to_add.push(Movie {
        id: 0,
        tmdb_id: report.tmdb_id,
        imdb_id: report.imdb_id.clone(),
        title: report.title.clone(),
        year: report.year,
        monitored,
        root_folder_path: definition.root_folder_path.clone(),
        quality_profile_id: definition.quality_profile_id,
        minimum_availability: definition.minimum_availability,
        tags: definition.tags.clone(),
        add_options: Some(AddMovieOptions {
            search_for_movie: monitored,
        }),
    });

    Ok(())
}
