use anyhow::{Context, Result};
use async_trait::async_trait;
use cinesync_core::{AddMovieService, ExclusionService, ListMovieStore, MovieService};
use cinesync_models::{ListExclusion, ListMovie, Movie};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info, warn};

/// Standalone persistence over JSON files in the data directory.
///
/// One file for the library, one for exclusions, one snapshot per list.
/// Every mutation rewrites the whole file; the engine runs cycles
/// sequentially, and the internal lock covers stray concurrent callers.
pub struct JsonLibraryStore {
    library_path: PathBuf,
    exclusions_path: PathBuf,
    list_movies_dir: PathBuf,
    lock: Mutex<()>,
}

impl JsonLibraryStore {
    pub fn new(library_path: PathBuf, exclusions_path: PathBuf, list_movies_dir: PathBuf) -> Self {
        Self {
            library_path,
            exclusions_path,
            list_movies_dir,
            lock: Mutex::new(()),
        }
    }

    fn read_json<T: serde::de::DeserializeOwned + Default>(path: &Path) -> Result<T> {
        if !path.exists() {
            return Ok(T::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(value)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    fn load_library(&self) -> Result<Vec<Movie>> {
        Self::read_json(&self.library_path)
    }

    fn save_library(&self, movies: &[Movie]) -> Result<()> {
        Self::write_json(&self.library_path, &movies)
    }

    /// Radarr-style folder layout: `<root>/<Title> (<year>)`.
    fn movie_directory(movie: &Movie) -> Option<PathBuf> {
        if movie.root_folder_path.is_empty() || movie.title.is_empty() {
            return None;
        }
        Some(Path::new(&movie.root_folder_path).join(format!("{} ({})", movie.title, movie.year)))
    }
}

#[async_trait]
impl MovieService for JsonLibraryStore {
    async fn get_all_movies(&self) -> Result<Vec<Movie>> {
        let _guard = self.lock.lock().unwrap();
        self.load_library()
    }

    async fn find_by_tmdb_id(&self, tmdb_id: u64) -> Result<Option<Movie>> {
        let _guard = self.lock.lock().unwrap();
        Ok(self
            .load_library()?
            .into_iter()
            .find(|m| m.tmdb_id == tmdb_id))
    }

    async fn update_movies(&self, movies: Vec<Movie>, _notify: bool) -> Result<()> {
        if movies.is_empty() {
            return Ok(());
        }

        let _guard = self.lock.lock().unwrap();
        let mut library = self.load_library()?;
        for updated in movies {
            if let Some(existing) = library.iter_mut().find(|m| m.id == updated.id) {
                *existing = updated;
            } else {
                warn!(id = updated.id, "update for a movie not in the library");
            }
        }
        self.save_library(&library)
    }

    async fn delete_movie(&self, id: i32, delete_files: bool) -> Result<()> {
        let _guard = self.lock.lock().unwrap();
        let mut library = self.load_library()?;
        let Some(index) = library.iter().position(|m| m.id == id) else {
            warn!(id, "delete for a movie not in the library");
            return Ok(());
        };
        let movie = library.remove(index);
        self.save_library(&library)?;

        if delete_files {
            if let Some(dir) = Self::movie_directory(&movie) {
                if dir.exists() {
                    std::fs::remove_dir_all(&dir)
                        .with_context(|| format!("Failed to delete {}", dir.display()))?;
                    info!(movie = %movie.title, path = %dir.display(), "deleted movie files");
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl AddMovieService for JsonLibraryStore {
    async fn add_movies(&self, movies: Vec<Movie>, search_immediately: bool) -> Result<()> {
        if movies.is_empty() {
            debug!("no movies to add");
            return Ok(());
        }

        let _guard = self.lock.lock().unwrap();
        let mut library = self.load_library()?;
        let mut next_id = library.iter().map(|m| m.id).max().unwrap_or(0) + 1;

        for mut movie in movies {
            movie.id = next_id;
            next_id += 1;
            info!(
                movie = %movie.title,
                tmdb_id = movie.tmdb_id,
                search = search_immediately && movie.monitored,
                "added movie to library"
            );
            library.push(movie);
        }

        self.save_library(&library)
    }
}

#[async_trait]
impl ExclusionService for JsonLibraryStore {
    async fn all_exclusions(&self) -> Result<Vec<ListExclusion>> {
        let _guard = self.lock.lock().unwrap();
        Self::read_json(&self.exclusions_path)
    }
}

#[async_trait]
impl ListMovieStore for JsonLibraryStore {
    async fn sync_movies_for_list(&self, movies: Vec<ListMovie>, list_id: i32) -> Result<()> {
        let _guard = self.lock.lock().unwrap();
        let path = self.list_movies_dir.join(format!("list-{}.json", list_id));
        debug!(list_id, count = movies.len(), "writing list snapshot");
        Self::write_json(&path, &movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> JsonLibraryStore {
        JsonLibraryStore::new(
            dir.join("library.json"),
            dir.join("exclusions.json"),
            dir.join("list-movies"),
        )
    }

    fn movie(title: &str, tmdb_id: u64) -> Movie {
        Movie {
            tmdb_id,
            title: title.to_string(),
            year: 1999,
            monitored: true,
            ..Movie::default()
        }
    }

    #[tokio::test]
    async fn missing_files_read_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        assert!(store.get_all_movies().await.unwrap().is_empty());
        assert!(store.all_exclusions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_assigns_increasing_ids_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store
            .add_movies(vec![movie("The Matrix", 603), movie("Fight Club", 550)], true)
            .await
            .unwrap();
        store.add_movies(vec![movie("Heat", 949)], true).await.unwrap();

        let library = store.get_all_movies().await.unwrap();
        let ids: Vec<i32> = library.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let found = store.find_by_tmdb_id(550).await.unwrap().unwrap();
        assert_eq!(found.title, "Fight Club");
    }

    #[tokio::test]
    async fn update_replaces_matching_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        store.add_movies(vec![movie("The Matrix", 603)], true).await.unwrap();

        let mut updated = store.find_by_tmdb_id(603).await.unwrap().unwrap();
        updated.monitored = false;
        store.update_movies(vec![updated], true).await.unwrap();

        let library = store.get_all_movies().await.unwrap();
        assert!(!library[0].monitored);
    }

    #[tokio::test]
    async fn delete_without_files_keeps_the_movie_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let mut m = movie("The Matrix", 603);
        m.root_folder_path = dir.path().join("movies").to_string_lossy().into_owned();
        let movie_dir = Path::new(&m.root_folder_path).join("The Matrix (1999)");
        std::fs::create_dir_all(&movie_dir).unwrap();

        store.add_movies(vec![m], true).await.unwrap();
        store.delete_movie(1, false).await.unwrap();

        assert!(store.get_all_movies().await.unwrap().is_empty());
        assert!(movie_dir.exists());
    }

    #[tokio::test]
    async fn delete_with_files_removes_the_movie_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let mut m = movie("The Matrix", 603);
        m.root_folder_path = dir.path().join("movies").to_string_lossy().into_owned();
        let movie_dir = Path::new(&m.root_folder_path).join("The Matrix (1999)");
        std::fs::create_dir_all(&movie_dir).unwrap();

        store.add_movies(vec![m], true).await.unwrap();
        store.delete_movie(1, true).await.unwrap();

        assert!(!movie_dir.exists());
    }

    #[tokio::test]
    async fn list_snapshots_land_in_per_list_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let items = vec![ListMovie {
            tmdb_id: 603,
            title: "The Matrix".to_string(),
            list_id: 4,
            ..ListMovie::default()
        }];
        store.sync_movies_for_list(items, 4).await.unwrap();

        let path = dir.path().join("list-movies").join("list-4.json");
        let content = std::fs::read_to_string(path).unwrap();
        let parsed: Vec<ListMovie> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed[0].tmdb_id, 603);
    }
}
