pub mod config;
pub mod paths;

pub use config::{
    Config, ListConfig, ListKind, ListSyncLevel, SchedulerConfig, SyncConfig, TmdbConfig,
};
pub use paths::PathManager;
