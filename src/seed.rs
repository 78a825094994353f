//! Stand-in for the external collaborator that delivers the starting catalog.

use std::collections::HashSet;
use std::time::Duration;

use tracing::{info, instrument};

use crate::domain::Product;
use crate::error::SeedError;

/// Starter catalog, prices in IDR.
pub fn initial_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Stylish Black Hat",
            250_000.0,
            10,
            "https://www.meghansfashion.com/uploads/2/1/2/9/21295692/miss-jones-by-stephen-jones-facetime-aw19-black-hat_orig.jpg",
        ),
        Product::new(
            2,
            "Modern Chair",
            1_500_000.0,
            5,
            "https://staranddaisy.in/wp-content/uploads/2023/08/Makeup-Stool-Iron-Dining-Chair-Business-Negotiation-Chair-Coffee-Chairpink-768x768.jpg",
        ),
        Product::new(
            3,
            "Minimalist Lamp",
            750_000.0,
            8,
            "https://m.media-amazon.com/images/I/61H49SeYn3L.__AC_SY445_SX342_QL70_FMwebp_.jpg",
        ),
        Product::new(
            4,
            "Ceramic Plate",
            120_000.0,
            20,
            "https://cdn.shopify.com/s/files/1/0278/8642/0047/files/2_600x600.png?v=1730123087",
        ),
    ]
}

/// Resolves once with the starter catalog after `delay`, like a slow network fetch.
#[instrument]
pub async fn fetch_initial_products(delay: Duration) -> Vec<Product> {
    tokio::time::sleep(delay).await;
    let products = initial_products();
    info!(count = products.len(), "Initial products fetched");
    products
}

/// Parses Product-shaped JSON records. Ids and names must be unique.
pub fn parse_products(json: &str) -> Result<Vec<Product>, SeedError> {
    let products: Vec<Product> =
        serde_json::from_str(json).map_err(|e| SeedError::Malformed(e.to_string()))?;

    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for product in &products {
        if !ids.insert(product.id) {
            return Err(SeedError::DuplicateId(product.id));
        }
        if !names.insert(product.name.as_str()) {
            return Err(SeedError::DuplicateName(product.name.clone()));
        }
    }
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_products_are_unique() {
        let products = initial_products();
        let mut names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4);
        assert!(products.iter().all(|p| p.price > 0.0 && p.stock > 0));
    }

    #[test]
    fn test_parse_products() {
        let json = r#"[
            {"id": 10, "name": "Mug", "price": 45000, "stock": 12, "image": "mug.png"}
        ]"#;
        let products = parse_products(json).unwrap();
        assert_eq!(products, vec![Product::new(10, "Mug", 45_000.0, 12, "mug.png")]);
    }

    #[test]
    fn test_parse_products_rejects_missing_fields() {
        let json = r#"[{"id": 10, "name": "Mug"}]"#;
        assert!(matches!(parse_products(json), Err(SeedError::Malformed(_))));
    }

    #[test]
    fn test_parse_products_rejects_duplicates() {
        let json = r#"[
            {"id": 18446744073709551615, "name": "Mug", "price": 1, "stock": 1, "image": "a"},
            {"id": 18446744073709551615, "name": "Cup", "price": 1, "stock": 1, "image": "b"}
        ]"#;
        assert_eq!(parse_products(json), Err(SeedError::DuplicateId(u64::MAX)));

        let json = r#"[
            {"id": 1, "name": "Mug", "price": 1, "stock": 1, "image": "a"},
            {"id": 2, "name": "Mug", "price": 1, "stock": 1, "image": "b"}
        ]"#;
        assert_eq!(
            parse_products(json),
            Err(SeedError::DuplicateName("Mug".to_string()))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_waits_for_delay() {
        let start = tokio::time::Instant::now();
        let products = fetch_initial_products(Duration::from_millis(1000)).await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert_eq!(products.len(), 4);
    }
}
