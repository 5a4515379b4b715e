use crate::config::toml_config::TomlConfig;
use crate::config::ScrapeConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "discount-scraper")]
#[command(about = "Fetch a shop's sale page and list products by discount")]
pub struct CliConfig {
    #[arg(long, help = "Page to fetch (defaults to the umami.ee sale page)")]
    pub url: Option<String>,

    #[arg(long, help = "Request timeout in seconds; no timeout when omitted")]
    pub timeout_secs: Option<u64>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 優先序：命令列參數 > TOML 檔案 > 預設值
    pub fn resolve(&self) -> Result<ScrapeConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                TomlConfig::from_file(path)?.to_scrape_config()
            }
            None => ScrapeConfig::default(),
        };

        if let Some(url) = &self.url {
            config.url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Some(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }
}
