pub mod exclusion;
pub mod list_movie;
pub mod list_status;
pub mod movie;

pub use exclusion::ListExclusion;
pub use list_movie::{CoverType, ListMovie, MediaCover, MovieRatings, MovieStatus};
pub use list_status::ListStatus;
pub use movie::{AddMovieOptions, MinimumAvailability, Movie};
