use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub title: String,
    pub description: String,
    pub discount_percent: i64,
}

/// 抓取到的頁面；回應串流在 fetch 結束前就已讀完並釋放
#[derive(Debug, Clone)]
pub struct Page {
    pub url: String,
    pub status: u16,
    pub body: Vec<u8>,
}

/// 單筆記錄被略過的原因，不會中斷整個流程
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("discount percentage is empty")]
    EmptyDiscount,

    #[error("invalid discount percentage {text:?}: {source}")]
    InvalidDiscount {
        text: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub index: usize,
    pub title: String,
    pub reason: SkipReason,
}

/// `products.len() + skipped.len() == containers`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub containers: usize,
    pub products: Vec<Product>,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub containers: usize,
    pub reported: usize,
    pub skipped: usize,
}
