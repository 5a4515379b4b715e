pub mod engine;
pub mod extractor;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{
    Extraction, Page, Product, RunSummary, SkipReason, SkippedRecord,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
