use cinesync_config::{Config, PathManager};
use cinesync_core::{ListSyncCommand, ListSyncService};
use color_eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info, warn};

pub async fn run_daemon(schedule_override: Option<String>, no_startup_sync: bool) -> Result<()> {
    let paths = PathManager::default();
    let config = Config::load(&paths.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("{:#}", e))?;

    let scheduler_config = config.scheduler.clone().unwrap_or_default();
    let schedule = schedule_override.unwrap_or(scheduler_config.schedule);
    let run_on_startup = if no_startup_sync {
        false
    } else {
        scheduler_config.run_on_startup
    };

    let service = Arc::new(
        crate::commands::build_service(&config, &paths)
            .map_err(|e| color_eyre::eyre::eyre!("{:#}", e))?,
    );
    // One cycle at a time; a slow cycle makes the scheduler skip, not queue.
    let busy = Arc::new(Mutex::new(()));

    if run_on_startup {
        info!("running initial sync on startup");
        run_cycle(&service, &busy).await;
    }

    let scheduler = JobScheduler::new().await?;
    let job_service = service.clone();
    let job_busy = busy.clone();
    scheduler
        .add(Job::new_async(schedule.as_str(), move |_uuid, _lock| {
            let service = job_service.clone();
            let busy = job_busy.clone();
            Box::pin(async move {
                run_cycle(&service, &busy).await;
            })
        })?)
        .await?;
    scheduler.start().await?;

    info!(schedule, "scheduler started");

    tokio::signal::ctrl_c().await?;
    info!("shutting down");

    Ok(())
}

async fn run_cycle(service: &ListSyncService, busy: &Mutex<()>) {
    let Ok(_guard) = busy.try_lock() else {
        warn!("previous sync still running, skipping this cycle");
        return;
    };

    match service.execute(ListSyncCommand::default()).await {
        Ok(summary) => {
            info!(
                found = summary.movies_found,
                added = summary.movies_added,
                unmonitored = summary.unmonitored,
                removed = summary.removed,
                any_failure = summary.any_failure,
                elapsed_ms = summary.duration.as_millis() as u64,
                "scheduled sync complete"
            );
        }
        Err(e) => {
            error!(error = %e, "scheduled sync failed");
        }
    }
}
