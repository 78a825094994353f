use serde::{Deserialize, Serialize};

use crate::validation::ValidDraft;

/// Identifier of a product within one catalog.
pub type ProductId = u64;

/// Represents a product in the catalog.
///
/// Products are owned by the [`CatalogStore`](crate::store::CatalogStore); everything
/// else works on clones or borrowed snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub image: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        stock: u32,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
            image: image.into(),
        }
    }

    /// Builds a new product from a validated draft.
    ///
    /// # Arguments
    /// * `id` - Freshly minted identifier
    /// * `draft` - Payload that already passed the validation gate
    /// * `default_image` - Used when the draft carries no image
    pub(crate) fn from_create(id: ProductId, draft: ValidDraft, default_image: &str) -> Self {
        let (name, price, stock, image) = draft.into_parts();
        Self {
            id,
            name,
            price,
            stock,
            image: image.unwrap_or_else(|| default_image.to_string()),
        }
    }

    /// Replaces the mutable fields in place.
    ///
    /// # Fields Updated
    /// - `name`, `price`, `stock`: always
    /// - `image`: only when the draft carries one
    pub(crate) fn on_update(&mut self, draft: ValidDraft) {
        let (name, price, stock, image) = draft.into_parts();
        self.name = name;
        self.price = price;
        self.stock = stock;
        if let Some(image) = image {
            self.image = image;
        }
    }
}

/// Form payload for creating or editing a product.
///
/// Fields hold raw form input: `stock` is a wide integer so that negative or
/// out-of-range entries reach the validation gate instead of failing earlier.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub image: Option<String>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: f64, stock: i64) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

impl From<&Product> for ProductDraft {
    /// Prefills an edit form. The image is left unset so an edit keeps it.
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            stock: i64::from(product.stock),
            image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_prefill_leaves_image_unset() {
        let product = Product::new(7, "Modern Chair", 1_500_000.0, 5, "chair.jpg");
        let draft = ProductDraft::from(&product);

        assert_eq!(draft.name, "Modern Chair");
        assert_eq!(draft.price, 1_500_000.0);
        assert_eq!(draft.stock, 5);
        assert_eq!(draft.image, None);
    }

    #[test]
    fn test_blank_draft_matches_form_defaults() {
        let draft = ProductDraft::default();
        assert!(draft.name.is_empty());
        assert_eq!(draft.price, 0.0);
        assert_eq!(draft.stock, 0);
    }
}
