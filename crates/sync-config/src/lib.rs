mod ai_config;
mod board_api_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod schedule_config;
mod scheduler_config;

#[cfg(test)]
mod tests;

pub use ai_config::AiConfig;
pub use board_api_config::BoardApiConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use schedule_config::ScheduleConfig;
pub use scheduler_config::SchedulerConfig;

const DEFAULT_WEEK_START_TOKEN: &str = "sunday";
const DEFAULT_UTC_OFFSET_TOKEN: &str = "GMT+2";
const DEFAULT_BOARD_API_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_AI_URL: &str = "https://api.openai.com";
const DEFAULT_AI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
