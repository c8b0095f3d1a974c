pub mod auto_add;
pub mod clean;
pub mod fetch;
pub mod identity;
pub mod mapper;
pub mod services;
pub mod sync;

#[cfg(test)]
mod testing;

pub use clean::CleanSummary;
pub use fetch::FetchOutcome;
pub use identity::{dedup_key, dedup_list_movies, is_still_listed, MovieKey};
pub use services::{AddMovieService, ExclusionService, ListMovieStore, MovieService};
pub use sync::{ListSyncCommand, ListSyncService, SyncSummary};
