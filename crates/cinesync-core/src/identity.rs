// Identity resolution across the three identifier namespaces a list entry
// can carry: TMDB id, IMDB id, free-text title.

use cinesync_models::{ListMovie, Movie};
use std::collections::HashSet;

/// Dedup key for fetched list entries: single-field priority.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovieKey {
    Tmdb(u64),
    Imdb(String),
    Title(String),
}

/// TMDB id when present, else IMDB id, else the exact (case-sensitive)
/// title.
pub fn dedup_key(movie: &ListMovie) -> MovieKey {
    if movie.tmdb_id != 0 {
        MovieKey::Tmdb(movie.tmdb_id)
    } else if !movie.imdb_id.is_empty() {
        MovieKey::Imdb(movie.imdb_id.clone())
    } else {
        MovieKey::Title(movie.title.clone())
    }
}

/// Remove duplicates across providers, keeping the first occurrence.
/// Insertion order is preserved, so configuration order decides precedence.
pub fn dedup_list_movies(movies: Vec<ListMovie>) -> Vec<ListMovie> {
    let mut seen = HashSet::new();
    movies
        .into_iter()
        .filter(|movie| seen.insert(dedup_key(movie)))
        .collect()
}

/// Cleanup predicate: a library movie is still listed when any fetched item
/// matches it on TMDB id OR on IMDB id, each field compared only when
/// present on both sides.
///
/// Deliberately looser than `dedup_key`: a list that knows a movie only by
/// the other id field must still protect it from cleanup.
pub fn is_still_listed(movie: &Movie, list_movies: &[ListMovie]) -> bool {
    list_movies.iter().any(|candidate| {
        (movie.tmdb_id != 0 && candidate.tmdb_id == movie.tmdb_id)
            || (!movie.imdb_id.is_empty() && candidate.imdb_id == movie.imdb_id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_movie(tmdb_id: u64, imdb_id: &str, title: &str) -> ListMovie {
        ListMovie {
            tmdb_id,
            imdb_id: imdb_id.to_string(),
            title: title.to_string(),
            ..ListMovie::default()
        }
    }

    fn library_movie(tmdb_id: u64, imdb_id: &str) -> Movie {
        Movie {
            tmdb_id,
            imdb_id: imdb_id.to_string(),
            ..Movie::default()
        }
    }

    #[test]
    fn key_prefers_tmdb_id() {
        let key = dedup_key(&list_movie(603, "tt0133093", "The Matrix"));
        assert_eq!(key, MovieKey::Tmdb(603));
    }

    #[test]
    fn key_falls_back_to_imdb_id_then_title() {
        let key = dedup_key(&list_movie(0, "tt0133093", "The Matrix"));
        assert_eq!(key, MovieKey::Imdb("tt0133093".to_string()));

        let key = dedup_key(&list_movie(0, "", "The Matrix"));
        assert_eq!(key, MovieKey::Title("The Matrix".to_string()));
    }

    #[test]
    fn title_key_is_case_sensitive() {
        assert_ne!(
            dedup_key(&list_movie(0, "", "The Matrix")),
            dedup_key(&list_movie(0, "", "the matrix"))
        );
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let movies = vec![
            ListMovie {
                list_id: 1,
                ..list_movie(603, "", "The Matrix")
            },
            ListMovie {
                list_id: 2,
                ..list_movie(603, "tt0133093", "Matrix, The")
            },
            list_movie(550, "", "Fight Club"),
        ];

        let deduped = dedup_list_movies(movies);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].tmdb_id, 603);
        assert_eq!(deduped[0].list_id, 1);
        assert_eq!(deduped[1].tmdb_id, 550);
    }

    #[test]
    fn dedup_treats_id_namespaces_independently() {
        // Same movie reported once by imdb id and once by tmdb id: the
        // single-field key cannot collapse them, by design.
        let movies = vec![
            list_movie(0, "tt0133093", "The Matrix"),
            list_movie(603, "", "The Matrix"),
        ];
        assert_eq!(dedup_list_movies(movies).len(), 2);
    }

    #[test]
    fn still_listed_matches_either_id_field() {
        let movie = library_movie(603, "tt0133093");

        assert!(is_still_listed(&movie, &[list_movie(603, "", "")]));
        assert!(is_still_listed(&movie, &[list_movie(0, "tt0133093", "")]));
        assert!(!is_still_listed(&movie, &[list_movie(550, "tt0137523", "")]));
    }

    #[test]
    fn absent_ids_never_match() {
        // A library movie without an imdb id must not "match" a list entry
        // that also lacks one.
        let movie = library_movie(603, "");
        assert!(!is_still_listed(&movie, &[list_movie(0, "", "Something")]));

        let movie = library_movie(0, "tt0133093");
        assert!(!is_still_listed(&movie, &[list_movie(0, "", "Something")]));
    }
}
