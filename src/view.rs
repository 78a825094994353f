//! Filter-then-sort derivation from catalog state to display order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Product;

/// Ordering applied to the filtered catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    PriceAsc,
    PriceDesc,
    StockAsc,
    StockDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::StockAsc,
        SortOption::StockDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::StockAsc => "stock-asc",
            SortOption::StockDesc => "stock-desc",
        }
    }

    /// Human-readable label for a sort menu.
    pub fn label(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::StockAsc => "Stock: Low to High",
            SortOption::StockDesc => "Stock: High to Low",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::PriceAsc => a.price.total_cmp(&b.price),
            SortOption::PriceDesc => b.price.total_cmp(&a.price),
            SortOption::StockAsc => a.stock.cmp(&b.stock),
            SortOption::StockDesc => b.stock.cmp(&a.stock),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown sort option: {0}")]
pub struct UnknownSortOption(pub String);

impl FromStr for SortOption {
    type Err = UnknownSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| UnknownSortOption(s.to_string()))
    }
}

/// Inputs of the view pipeline besides the catalog itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewQuery {
    pub search: String,
    pub sort: SortOption,
}

impl ViewQuery {
    pub fn new(search: impl Into<String>, sort: SortOption) -> Self {
        Self {
            search: search.into(),
            sort,
        }
    }
}

/// Keeps products whose name contains `search` (case-insensitive) and sorts
/// them by `sort`. Ties keep catalog order.
pub fn derive(catalog: &[Product], search: &str, sort: SortOption) -> Vec<Product> {
    let needle = search.to_lowercase();
    let mut matched: Vec<Product> = catalog
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    // `sort_by` is stable
    matched.sort_by(|a, b| sort.compare(a, b));
    matched
}

pub fn derive_with(catalog: &[Product], query: &ViewQuery) -> Vec<Product> {
    derive(catalog, &query.search, query.sort)
}

/// What the listing should show.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView {
    /// The initial catalog has not arrived yet.
    Loading,
    /// Nothing matches the current search.
    Empty,
    Ready(Vec<Product>),
}

impl CatalogView {
    pub fn from_derived(products: Vec<Product>) -> Self {
        if products.is_empty() {
            CatalogView::Empty
        } else {
            CatalogView::Ready(products)
        }
    }

    /// Products in display order; empty unless `Ready`.
    pub fn products(&self) -> &[Product] {
        match self {
            CatalogView::Ready(products) => products,
            _ => &[],
        }
    }
}
