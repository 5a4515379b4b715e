use crate::core::{Product, Result};
use std::io::Write;

pub const SEPARATOR: &str = "-------------------------";

/// 依折扣由高到低排序；折扣相同時保留擷取順序
pub fn sort_by_discount(products: &mut [Product]) {
    products.sort_by(|a, b| b.discount_percent.cmp(&a.discount_percent));
}

pub fn write_report<W: Write + ?Sized>(products: &[Product], out: &mut W) -> Result<()> {
    for product in products {
        writeln!(out, "Title: {}", product.title)?;
        writeln!(out, "Description: {}", product.description)?;
        writeln!(out, "Discount Percentage: {}%", product.discount_percent)?;
        writeln!(out, "{}", SEPARATOR)?;
    }
    out.flush()?;
    Ok(())
}
