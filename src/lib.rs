pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{toml_config::TomlConfig, ScrapeConfig, DEFAULT_URL};
pub use core::{engine::ScrapeEngine, pipeline::DiscountPipeline};
pub use domain::model::{Extraction, Page, Product, RunSummary, SkipReason, SkippedRecord};
pub use utils::error::{Result, ScrapeError};
