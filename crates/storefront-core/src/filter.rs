//! Search, category and price-order filtering over the resident collection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseSortModeError;
use crate::product::Product;

/// Category sentinel that disables category filtering
pub const CATEGORY_ALL: &str = "All";

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Collection order
    #[default]
    Default,
    #[serde(rename = "asc")]
    PriceAsc,
    #[serde(rename = "desc")]
    PriceDesc,
}

impl SortMode {
    pub fn all() -> &'static [SortMode] {
        &[SortMode::Default, SortMode::PriceAsc, SortMode::PriceDesc]
    }

    /// Value used in the sort `<select>` and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::PriceAsc => "asc",
            SortMode::PriceDesc => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Default => "Default",
            SortMode::PriceAsc => "Price: Low → High",
            SortMode::PriceDesc => "Price: High → Low",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = ParseSortModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortMode::Default),
            "asc" | "priceAsc" => Ok(SortMode::PriceAsc),
            "desc" | "priceDesc" => Ok(SortMode::PriceDesc),
            other => Err(ParseSortModeError(other.to_string())),
        }
    }
}

/// Narrow and order the collection for display.
///
/// Steps run in a fixed order: title search (case-insensitive substring of
/// the trimmed term), exact category match unless [`CATEGORY_ALL`], then a
/// stable price sort. The input slice is never reordered.
pub fn filter_products<'a>(
    products: &'a [Product],
    search_term: &str,
    category: &str,
    sort: SortMode,
) -> Vec<&'a Product> {
    let needle = search_term.trim().to_lowercase();

    let mut result: Vec<&Product> = products
        .iter()
        .filter(|p| needle.is_empty() || p.title.to_lowercase().contains(&needle))
        .filter(|p| category == CATEGORY_ALL || p.category == category)
        .collect();

    // sort_by is stable, so equal prices keep collection order
    match sort {
        SortMode::Default => {}
        SortMode::PriceAsc => result.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::PriceDesc => result.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    result
}

/// `All` followed by each distinct category in first-seen order
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut out = vec![CATEGORY_ALL.to_string()];
    for product in products {
        if !out[1..].iter().any(|c| c == &product.category) {
            out.push(product.category.clone());
        }
    }
    out
}
