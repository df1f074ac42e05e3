use crate::{DEFAULT_UTC_OFFSET_TOKEN, DEFAULT_WEEK_START_TOKEN};

use serde::Deserialize;

/// Raw schedule tokens as staff configure them. Parsing is deliberately
/// deferred to the schedule calculator, which falls back to its defaults on
/// malformed input instead of failing, so this section has no validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Day-name token, e.g. "monday" or "mon"
    pub week_start: String,
    /// Offset token of the form "GMT+2" / "UTC-5"
    pub utc_offset: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            week_start: String::from(DEFAULT_WEEK_START_TOKEN),
            utc_offset: String::from(DEFAULT_UTC_OFFSET_TOKEN),
        }
    }
}
