#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use ::log::LevelFilter;
use chrono::Weekday;

pub mod log;
pub mod service;

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, String>;
    async fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub week_start: Weekday,
    pub target_fetch_delay_ms: u64,
    pub log_level: String,
}

impl Settings {
    /// Unknown level names fall back to `Info`.
    #[must_use]
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    #[must_use]
    pub fn target_fetch_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.target_fetch_delay_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
            target_fetch_delay_ms: 500,
            log_level: "info".to_string(),
        }
    }
}
