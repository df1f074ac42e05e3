mod cli;
mod error;
mod logger;

use crate::cli::Cli;

use sync_db::{BoardRepository, MergeRecordRepository, TeamMemberRepository};
use sync_engine::{DueSprintScheduler, HttpAiClient, HttpBoardClient, SprintMergeExecutor};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(ref dir) = cli.config_dir {
        unsafe {
            std::env::set_var("SYNC_CONFIG_DIR", dir);
        }
    }

    // Load and validate configuration
    let config = sync_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = sync_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting sync-runner v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool and bring the schema up to date
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = sync_db::connect(&database_path).await?;
    info!("Database connection established");

    // Wire the collaborator clients and the merge pipeline
    let board_api = HttpBoardClient::new(
        &config.board_api.base_url,
        config.board_api.api_key.as_deref(),
        Duration::from_secs(config.board_api.timeout_secs),
    )?;
    let ai = HttpAiClient::new(
        &config.ai.base_url,
        config.ai.api_key.as_deref(),
        &config.ai.model,
        Duration::from_secs(config.ai.timeout_secs),
    )?;

    let executor = SprintMergeExecutor::new(
        BoardRepository::new(pool.clone()),
        MergeRecordRepository::new(pool.clone()),
        Arc::new(board_api),
        Arc::new(ai),
    );
    let scheduler = DueSprintScheduler::new(
        TeamMemberRepository::new(pool.clone()),
        BoardRepository::new(pool.clone()),
        MergeRecordRepository::new(pool),
        executor,
    );

    if cli.once {
        run_pass(&scheduler).await;
        return Ok(());
    }

    // First tick fires immediately, then every configured interval. A pass
    // always finishes before the next tick is consumed, so passes never
    // overlap within one runner.
    let mut ticker = tokio::time::interval(Duration::from_secs(config.scheduler.interval_secs));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => run_pass(&scheduler).await,
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received, stopping");
                break;
            }
        }
    }

    Ok(())
}

async fn run_pass(scheduler: &DueSprintScheduler) {
    match scheduler.run().await {
        Ok(report) => {
            for line in &report.errors {
                error!("Merge failed: {line}");
            }
        }
        Err(e) => error!("Merge pass aborted: {e}"),
    }
}
