use cinesync_models::MinimumAvailability;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Durable per-list configuration, read-only to the sync engine.
///
/// Everything a staged auto-add inherits (root folder, quality profile,
/// minimum availability, tags, monitor flag) lives here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListDefinition {
    pub id: i32,
    pub name: String,
    pub enabled: bool,
    pub enable_auto: bool,
    pub root_folder_path: String,
    pub quality_profile_id: i32,
    pub minimum_availability: MinimumAvailability,
    pub tags: HashSet<i32>,
    pub should_monitor: bool,
}
