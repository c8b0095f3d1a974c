pub mod definition;
pub mod error;
pub mod factory;
pub mod radarr_list;
pub mod registry;
pub mod status;
pub mod stevenlu;
pub mod tmdb;
pub mod traits;

pub use definition::ListDefinition;
pub use error::ListError;
pub use factory::build_registry;
pub use radarr_list::RadarrListImport;
pub use registry::ListRegistry;
pub use status::{ListStatusService, ListStatusTracker};
pub use stevenlu::StevenLuImport;
pub use tmdb::{MovieSearch, TmdbMovieSearch};
pub use traits::ImportList;
