#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use std::time::Duration;

pub const DEFAULT_URL: &str = "https://umami.ee/soodus-2/";

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// CLI 與 TOML 合併後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    pub url: String,
    pub timeout: Option<Duration>,
}

impl ScrapeConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}

impl ConfigProvider for ScrapeConfig {
    fn url(&self) -> &str {
        &self.url
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Validate for ScrapeConfig {
    fn validate(&self) -> Result<()> {
        validate_url("url", &self.url)?;
        if let Some(timeout) = self.timeout {
            validate_range(
                "timeout_secs",
                timeout.as_secs(),
                MIN_TIMEOUT_SECS,
                MAX_TIMEOUT_SECS,
            )?;
        }
        Ok(())
    }
}
