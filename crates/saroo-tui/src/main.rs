// Draft board entry point.
//
// Startup sequence:
// 1. Load config (writing the default file on first run)
// 2. Initialize tracing (log to file, not terminal)
// 3. Build the roster source and the application state
// 4. Create mpsc channels
// 5. Spawn the roster loader and the app event loop
// 6. Run the TUI until the user quits
// 7. Cleanup on exit

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use saroo_app::app::{self, AppState};
use saroo_app::config::{self, Config};
use saroo_app::fetch;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load config
    let config = config::load_config().context("failed to load configuration")?;

    // 2. Initialize tracing
    init_tracing(&config)?;
    info!("saroo starting up, config from {}", config.base_dir.display());

    // 3. Roster source and state
    let source = fetch::source_from_config(&config.roster)
        .context("failed to set up roster source")?;
    info!("Roster source: {}", source.describe());
    let state = AppState::new(config, source.describe());

    // 4. Channels
    let (roster_tx, roster_rx) = mpsc::channel(1);
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);

    // 5. Loader and app tasks
    let loader_handle = tokio::spawn(async move {
        fetch::load_roster(source.as_ref(), roster_tx).await;
    });

    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(roster_rx, cmd_rx, ui_tx, state).await {
            error!("Application loop error: {}", e);
        }
    });

    // 6. TUI, blocking until the user quits
    if let Err(e) = saroo_tui::run(ui_rx, cmd_tx).await {
        error!("TUI error: {}", e);
    }

    // 7. Cleanup: let the app loop finish, stop a fetch still in flight
    let _ = tokio::time::timeout(Duration::from_secs(5), async {
        let _ = app_handle.await;
    })
    .await;
    loader_handle.abort();

    info!("saroo shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (the terminal belongs to the TUI).
///
/// `RUST_LOG` wins over the config's `logging.filter`.
fn init_tracing(config: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_path = config.log_file_path();
    if let Some(dir) = log_path.parent().filter(|d| *d != Path::new("")) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("failed to create log file {}", log_path.display()))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
