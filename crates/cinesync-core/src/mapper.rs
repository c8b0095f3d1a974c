use cinesync_lists::MovieSearch;
use cinesync_models::ListMovie;
use tracing::debug;

/// Enrich a raw list entry with its canonical metadata record.
///
/// Best-effort: a mapping miss leaves the raw fields untouched, and the
/// item still takes part in dedup, cleanup matching and auto-add. The
/// origin `list_id` is never overwritten.
pub async fn map_movie_report(search: &dyn MovieSearch, report: &mut ListMovie) {
    let Some(mapped) = search.map_to_canonical(report).await else {
        debug!(
            tmdb_id = report.tmdb_id,
            imdb_id = %report.imdb_id,
            title = %report.title,
            "no canonical match for list entry, keeping raw fields"
        );
        return;
    };

    report.tmdb_id = mapped.tmdb_id;
    report.imdb_id = mapped.imdb_id;
    report.title = mapped.title;
    report.sort_title = mapped.sort_title;
    report.year = mapped.year;
    report.overview = mapped.overview;
    report.ratings = mapped.ratings;
    report.studio = mapped.studio;
    report.certification = mapped.certification;
    report.status = mapped.status;
    report.images = mapped.images;
    report.website = mapped.website;
    report.youtube_trailer_id = mapped.youtube_trailer_id;
    report.in_cinemas = mapped.in_cinemas;
    report.physical_release = mapped.physical_release;
    report.digital_release = mapped.digital_release;
    report.genres = mapped.genres;
}
