use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use playdeck::cli::Cli;
use playdeck::config::{AppConfig, ConfigStore, InMemory, Persistence, TomlFile};
use playdeck::logging::{default_log_path, init_tracing};
use playdeck::ui::app::NowPlayingInfo;
use playdeck::ui::runtime::{run, RunOptions};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    init_tracing(&log_path)
        .with_context(|| format!("failed to open log file '{}'", log_path.display()))?;

    let persistence: Arc<dyn Persistence> = if cli.ephemeral {
        tracing::info!("using in-memory settings");
        Arc::new(InMemory::new())
    } else {
        let path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
        tracing::info!(path = %path.display(), "using config file");
        Arc::new(TomlFile::new(path))
    };
    let store = ConfigStore::open(persistence).context("failed to load configuration")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("playdeck-worker")
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    run(
        &store,
        runtime.handle().clone(),
        RunOptions {
            root: cli.screen,
            now_playing: NowPlayingInfo {
                state_title: cli.now_playing_title,
                state: cli.now_playing_state,
            },
        },
    )
    .context("terminal UI failed")?;

    Ok(())
}
