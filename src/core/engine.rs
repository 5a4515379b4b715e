use crate::core::{Pipeline, Result, RunSummary};
use std::io::Write;

pub struct ScrapeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ScrapeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// fetch → extract → report，任何致命錯誤都不會輸出部分報表
    pub async fn run(&self, out: &mut dyn Write) -> Result<RunSummary> {
        tracing::info!("Fetching page...");
        let page = self.pipeline.fetch().await?;
        tracing::info!("Fetched {} bytes from {}", page.body.len(), page.url);

        tracing::info!("Extracting products...");
        let extraction = self.pipeline.extract(&page)?;
        drop(page);
        tracing::info!(
            "Extracted {} products from {} containers ({} skipped)",
            extraction.products.len(),
            extraction.containers,
            extraction.skipped.len()
        );

        let summary = RunSummary {
            containers: extraction.containers,
            reported: extraction.products.len(),
            skipped: extraction.skipped.len(),
        };

        let mut products = extraction.products;
        self.pipeline.report(&mut products, out)?;
        tracing::debug!("Report written for {} products", products.len());

        Ok(summary)
    }
}
