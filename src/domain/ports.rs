use crate::domain::model::{Extraction, Page, Product};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn url(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<Page>;
    fn extract(&self, page: &Page) -> Result<Extraction>;
    fn report(&self, products: &mut [Product], out: &mut dyn Write) -> Result<()>;
}
