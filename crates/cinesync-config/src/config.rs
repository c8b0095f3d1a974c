use anyhow::{Context, Result};
use cinesync_models::MinimumAvailability;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub lists: Vec<ListConfig>,
    #[serde(default)]
    pub tmdb: Option<TmdbConfig>,
    #[serde(default)]
    pub scheduler: Option<SchedulerConfig>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SyncConfig {
    /// What to do with library movies that have fallen out of every list.
    #[serde(default)]
    pub list_sync_level: ListSyncLevel,
}

/// Cleanup policy for library movies no longer present in any list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListSyncLevel {
    /// Never touch the library.
    #[default]
    Disabled,
    /// Report stale movies in the log, mutate nothing.
    LogOnly,
    /// Keep stale movies but set them to unmonitored.
    KeepAndUnmonitor,
    /// Remove stale movies from the library, preserving downloaded files.
    RemoveAndKeep,
    /// Remove stale movies and delete their files.
    RemoveAndDelete,
}

/// One configured external list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    pub id: i32,
    pub name: String,
    pub kind: ListKind,
    pub url: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Allow items from this list to be added without manual review.
    #[serde(default)]
    pub enable_auto: bool,
    #[serde(default)]
    pub root_folder_path: String,
    #[serde(default = "default_quality_profile_id")]
    pub quality_profile_id: i32,
    #[serde(default)]
    pub minimum_availability: MinimumAvailability,
    #[serde(default = "default_true")]
    pub should_monitor: bool,
    #[serde(default)]
    pub tags: HashSet<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListKind {
    /// A Radarr-compatible list endpoint returning `[{ "id": <tmdb id> }]`.
    RadarrList,
    /// A StevenLu-style feed returning `[{ "title", "imdb_id" }]`.
    StevenLu,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Cron expression for recurring syncs.
    #[serde(default = "default_schedule")]
    pub schedule: String,
    #[serde(default = "default_true")]
    pub run_on_startup: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            schedule: default_schedule(),
            run_on_startup: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_quality_profile_id() -> i32 {
    1
}

fn default_schedule() -> String {
    // Every 6 hours
    "0 0 */6 * * *".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}
