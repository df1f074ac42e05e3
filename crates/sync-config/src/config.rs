use crate::{
    AiConfig, BoardApiConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig,
    ScheduleConfig, SchedulerConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub schedule: ScheduleConfig,
    pub board_api: BoardApiConfig,
    pub ai: AiConfig,
    pub scheduler: SchedulerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for SYNC_CONFIG_DIR env var, else use ./.sync/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SYNC_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SYNC_CONFIG_DIR env var > ./.sync/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("SYNC_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".sync"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.board_api.validate()?;
        self.ai.validate()?;
        self.scheduler.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  schedule: week_start={}, utc_offset={}",
            self.schedule.week_start, self.schedule.utc_offset
        );
        info!(
            "  board_api: {} (key: {}, timeout: {}s)",
            self.board_api.base_url,
            if self.board_api.api_key.is_some() {
                "set"
            } else {
                "unset"
            },
            self.board_api.timeout_secs
        );
        info!(
            "  ai: {} model={} (key: {}, timeout: {}s)",
            self.ai.base_url,
            self.ai.model,
            if self.ai.api_key.is_some() {
                "set"
            } else {
                "unset"
            },
            self.ai.timeout_secs
        );
        info!("  scheduler: every {}s", self.scheduler.interval_secs);
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Schedule
        Self::apply_env_string("SYNC_SCHEDULE_WEEK_START", &mut self.schedule.week_start);
        Self::apply_env_string("SYNC_SCHEDULE_UTC_OFFSET", &mut self.schedule.utc_offset);

        // Board API
        Self::apply_env_string("SYNC_BOARD_API_BASE_URL", &mut self.board_api.base_url);
        Self::apply_env_option_string("SYNC_BOARD_API_KEY", &mut self.board_api.api_key);
        Self::apply_env_parse("SYNC_BOARD_API_TIMEOUT_SECS", &mut self.board_api.timeout_secs);

        // AI
        Self::apply_env_string("SYNC_AI_BASE_URL", &mut self.ai.base_url);
        Self::apply_env_option_string("SYNC_AI_API_KEY", &mut self.ai.api_key);
        Self::apply_env_string("SYNC_AI_MODEL", &mut self.ai.model);
        Self::apply_env_parse("SYNC_AI_TIMEOUT_SECS", &mut self.ai.timeout_secs);

        // Scheduler
        Self::apply_env_parse("SYNC_SCHEDULER_INTERVAL_SECS", &mut self.scheduler.interval_secs);

        // Database
        Self::apply_env_string("SYNC_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("SYNC_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SYNC_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SYNC_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
