use crate::core::{extractor, report};
use crate::core::{ConfigProvider, Extraction, Page, Pipeline, Product, Result};
use crate::utils::error::ScrapeError;
use reqwest::{Client, StatusCode};
use std::io::Write;

pub struct DiscountPipeline<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> DiscountPipeline<C> {
    pub fn new(config: C) -> Result<Self> {
        // 未設定 timeout 時請求可能無限等待
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for DiscountPipeline<C> {
    async fn fetch(&self) -> Result<Page> {
        let url = self.config.url();
        tracing::debug!("Making request to: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status != StatusCode::OK {
            return Err(ScrapeError::StatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().to_string();
        let body = response.bytes().await?.to_vec();
        tracing::debug!("Read {} bytes from {}", body.len(), final_url);

        Ok(Page {
            url: final_url,
            status: status.as_u16(),
            body,
        })
    }

    fn extract(&self, page: &Page) -> Result<Extraction> {
        extractor::extract_products(&page.body)
    }

    fn report(&self, products: &mut [Product], out: &mut dyn Write) -> Result<()> {
        report::sort_by_discount(products);
        report::write_report(products, out)
    }
}
