use clap::{ArgAction, Parser, Subcommand};
use cinesync_config::PathManager;

mod commands;
mod logging;
mod store;

#[derive(Parser)]
#[command(name = "cinesync")]
#[command(about = "CineSync - keep a movie library in step with external lists")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one sync cycle against the configured lists
    #[command(long_about = "Fetch every configured list, reconcile the library against them per the configured sync level, and add new movies from lists with auto-add enabled.")]
    Sync {
        /// Restrict the cycle to a single list (0 = all lists)
        #[arg(long, value_name = "ID", default_value_t = 0)]
        list_id: i32,
    },
    /// Run as a daemon with the internal scheduler
    #[command(long_about = "Run recurring sync cycles on the configured cron schedule. A cycle that is still running when the next trigger fires is skipped, never queued.")]
    Daemon {
        /// Cron schedule expression (e.g. '0 0 */6 * * *' for every 6 hours)
        #[arg(long, value_name = "SCHEDULE")]
        schedule: Option<String>,

        /// Skip the initial sync on startup
        #[arg(long, action = ArgAction::SetTrue)]
        no_startup_sync: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Sync { list_id } => {
            logging::init_logging(cli.verbose, cli.quiet)
                .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
            commands::sync::run_sync(list_id).await
        }
        Commands::Daemon {
            schedule,
            no_startup_sync,
        } => {
            let paths = PathManager::default();
            logging::init_logging_with_file(
                cli.verbose,
                cli.quiet,
                Some(paths.daemon_log_file()),
            )
            .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
            commands::daemon::run_daemon(schedule, no_startup_sync).await
        }
    }
}
