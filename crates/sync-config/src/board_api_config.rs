use crate::{ConfigError, ConfigErrorResult, DEFAULT_BOARD_API_URL};

use serde::Deserialize;

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardApiConfig {
    pub base_url: String,
    /// Sent as the X-Api-Key header when present
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for BoardApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BOARD_API_URL),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl BoardApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::board_api("board_api.base_url must not be empty"));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::board_api(format!(
                "board_api.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
