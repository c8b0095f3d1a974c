use cinesync_config::{Config, PathManager};
use cinesync_core::ListSyncCommand;
use color_eyre::Result;
use tracing::info;

use crate::commands;

pub async fn run_sync(list_id: i32) -> Result<()> {
    let paths = PathManager::default();
    let config = Config::load(&paths.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("{:#}", e))?;

    let service = commands::build_service(&config, &paths)
        .map_err(|e| color_eyre::eyre::eyre!("{:#}", e))?;

    let summary = service
        .execute(ListSyncCommand { list_id })
        .await
        .map_err(|e| color_eyre::eyre::eyre!("{:#}", e))?;

    info!(
        found = summary.movies_found,
        added = summary.movies_added,
        unmonitored = summary.unmonitored,
        removed = summary.removed,
        any_failure = summary.any_failure,
        elapsed_ms = summary.duration.as_millis() as u64,
        "sync complete"
    );

    Ok(())
}
