//! Start-up configuration and logging.
//!
//! Everything is read once from the environment. Mute is not configurable:
//! the widget always starts muted.

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Builder, Target, WriteStyle};

pub const ENV_SEED: &str = "LUCKY_DRAW_SEED";
pub const ENV_AUDIO_DISABLED: &str = "LUCKY_DRAW_AUDIO_DISABLED";
pub const ENV_LOG_PATH: &str = "LUCKY_DRAW_LOG_PATH";
pub const ENV_LOG: &str = "LUCKY_DRAW_LOG";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed for reproducible draws; OS entropy when unset.
    pub seed: Option<u64>,
    pub audio_enabled: bool,
    /// Log file; logging is off when unset.
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            audio_enabled: true,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = non_empty(ENV_SEED).and_then(|s| match s.parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                log::warn!("ignoring unparsable {ENV_SEED}={s:?}");
                None
            }
        });

        let audio_enabled = !non_empty(ENV_AUDIO_DISABLED)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let log_path = non_empty(ENV_LOG_PATH).map(PathBuf::from);
        let log_filter = non_empty(ENV_LOG).unwrap_or_else(|| "info".to_string());

        Self {
            seed,
            audio_enabled,
            log_path,
            log_filter,
        }
    }

    /// Install the global logger. The terminal is in raw mode while the widget
    /// runs, so logs only ever go to a file. Returns whether logging is on.
    pub fn init_logging(&self) -> Result<bool> {
        let Some(path) = &self.log_path else {
            return Ok(false);
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;

        Builder::new()
            .parse_filters(&self.log_filter)
            .target(Target::Pipe(Box::new(file)))
            .write_style(WriteStyle::Never)
            .try_init()
            .context("installing logger")?;

        log::info!("logging to {}", path.display());
        Ok(true)
    }
}
