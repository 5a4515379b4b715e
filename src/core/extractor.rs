use crate::core::{Extraction, Product, Result, SkipReason, SkippedRecord};
use crate::utils::error::ScrapeError;
use scraper::{ElementRef, Html, Selector};

pub const CONTAINER_SELECTOR: &str = "div.white-bg";
pub const TITLE_SELECTOR: &str = "h4";
pub const DESCRIPTION_SELECTOR: &str = "p";
pub const DISCOUNT_SELECTOR: &str = "span.discount_percentage";

struct Selectors {
    container: Selector,
    title: Selector,
    description: Selector,
    discount: Selector,
}

impl Selectors {
    fn compile() -> Result<Self> {
        Ok(Self {
            container: parse_selector(CONTAINER_SELECTOR)?,
            title: parse_selector(TITLE_SELECTOR)?,
            description: parse_selector(DESCRIPTION_SELECTOR)?,
            discount: parse_selector(DISCOUNT_SELECTOR)?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::ParseError {
        message: format!("invalid selector {:?}: {:?}", selector, e),
    })
}

/// 解析 HTML 並依文件順序取出所有商品。
///
/// 折扣欄位為空或不是整數的容器會被略過並記錄，不會讓整個流程失敗；
/// 非 UTF-8 的位元組以替代字元處理；只有選擇器無法編譯時才回傳錯誤。
pub fn extract_products(body: &[u8]) -> Result<Extraction> {
    let html = String::from_utf8_lossy(body);
    let document = Html::parse_document(&html);
    let selectors = Selectors::compile()?;

    let mut extraction = Extraction::default();

    for (index, container) in document.select(&selectors.container).enumerate() {
        extraction.containers += 1;

        let title = text_of(container, &selectors.title);
        let description = text_of(container, &selectors.description);
        let discount_text = text_of(container, &selectors.discount);

        match parse_discount(&discount_text) {
            Ok(discount_percent) => extraction.products.push(Product {
                title,
                description,
                discount_percent,
            }),
            Err(reason) => {
                match &reason {
                    SkipReason::EmptyDiscount => tracing::warn!(
                        "Discount percentage is empty for product #{}: {}",
                        index,
                        title
                    ),
                    SkipReason::InvalidDiscount { source, .. } => tracing::warn!(
                        "Error parsing discount percentage for product #{}: {}",
                        index,
                        source
                    ),
                }
                extraction.skipped.push(SkippedRecord {
                    index,
                    title,
                    reason,
                });
            }
        }
    }

    tracing::debug!(
        "Matched {} containers, kept {}, skipped {}",
        extraction.containers,
        extraction.products.len(),
        extraction.skipped.len()
    );

    Ok(extraction)
}

/// 子元素不存在時回傳空字串
fn text_of(container: ElementRef<'_>, selector: &Selector) -> String {
    container
        .select(selector)
        .flat_map(|element| element.text())
        .collect()
}

/// 去掉前後空白與 `%` 後以十進位解析
pub fn parse_discount(raw: &str) -> std::result::Result<i64, SkipReason> {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '%');
    if trimmed.is_empty() {
        return Err(SkipReason::EmptyDiscount);
    }

    trimmed
        .parse::<i64>()
        .map_err(|source| SkipReason::InvalidDiscount {
            text: trimmed.to_string(),
            source,
        })
}
