//! Replay binary for the Podium leaderboard.
//!
//! Reads newline-delimited JSON host events from stdin, records every
//! finished game on a scoreboard, and prints the final standings as JSON on
//! stdout. Logs go to stderr.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `podium-config.yaml` (or `PODIUM_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build the scoreboard and register the logging observer
//! 4. Replay stdin until end of input
//! 5. Print the final standings

mod error;
mod log_callback;
mod replay;

use std::path::PathBuf;

use podium_core::config::{LoggingConfig, PodiumConfig};
use podium_core::scoreboard::Scoreboard;
use tokio::io::{AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::log_callback::LogCallback;

/// Environment variable naming an alternative config file.
const CONFIG_PATH_ENV: &str = "PODIUM_CONFIG";

/// Config file used when `PODIUM_CONFIG` is not set.
const DEFAULT_CONFIG_PATH: &str = "podium-config.yaml";

/// Application entry point for the replay engine.
///
/// # Errors
///
/// Returns an error if configuration, logging setup, or I/O fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let (config, config_path) = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging)?;
    info!(
        config_path = ?config_path,
        default_label = config.board.default_label,
        trim_blank = config.board.trim_blank,
        board_size = config.board.size,
        "podium-engine starting"
    );

    // 3. Build the scoreboard.
    let mut scoreboard = Scoreboard::new(&config);
    scoreboard.register(Box::new(LogCallback::new(config.board.size)));

    // 4. Replay host events.
    let stdin = BufReader::new(tokio::io::stdin());
    let stats = replay::replay(stdin, &mut scoreboard).await?;
    info!(
        lines = stats.lines,
        recorded = stats.recorded,
        renamed = stats.renamed,
        skipped = stats.skipped,
        "Replay complete"
    );

    // 5. Print the final standings.
    let mut output = serde_json::to_vec_pretty(&scoreboard.standings()).map_err(EngineError::from)?;
    output.push(b'\n');
    let mut stdout = tokio::io::stdout();
    stdout.write_all(&output).await.map_err(EngineError::from)?;
    stdout.flush().await.map_err(EngineError::from)?;

    Ok(())
}

/// Load configuration from `PODIUM_CONFIG` or `podium-config.yaml`.
///
/// A missing file means defaults. Returns the path that was read, if any.
fn load_config() -> Result<(PodiumConfig, Option<PathBuf>), EngineError> {
    let path = std::env::var_os(CONFIG_PATH_ENV)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    if path.exists() {
        let config = PodiumConfig::from_file(&path)?;
        Ok((config, Some(path)))
    } else {
        Ok((PodiumConfig::default(), None))
    }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(logging: &LoggingConfig) -> Result<(), EngineError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| EngineError::Logging {
        message: e.to_string(),
    })
}
