//! Authoritative in-memory product list.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::{Product, ProductId};
use crate::validation::ValidDraft;

/// Owns the catalog in insertion order.
///
/// Mutations take a [`ValidDraft`], so the store trusts its caller and never
/// re-validates. Missing ids degrade to no-ops.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
    next_id: ProductId,
    default_image: String,
}

impl CatalogStore {
    pub fn new(default_image: impl Into<String>) -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
            default_image: default_image.into(),
        }
    }

    /// Replaces the contents with the initial record set and reseeds the id counter.
    ///
    /// Records repeating an earlier id or name are dropped; the first one wins.
    pub fn load(&mut self, products: Vec<Product>) {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        let mut kept = Vec::with_capacity(products.len());
        for product in products {
            if ids.contains(&product.id) || names.contains(&product.name) {
                warn!(
                    product_id = %product.id,
                    product_name = %product.name,
                    "Duplicate product in initial load, dropping"
                );
                continue;
            }
            ids.insert(product.id);
            names.insert(product.name.clone());
            kept.push(product);
        }

        let max_id = kept.iter().map(|p| p.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id.saturating_add(1));
        self.products = kept;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Appends a new product and returns its id.
    pub fn create(&mut self, draft: ValidDraft) -> ProductId {
        let id = self.mint_id();
        self.products
            .push(Product::from_create(id, draft, &self.default_image));
        id
    }

    // Wraps back to 1 past `u64::MAX` and skips ids still in use.
    fn mint_id(&mut self) -> ProductId {
        let mut id = self.next_id;
        while self.get(id).is_some() {
            id = id.checked_add(1).unwrap_or(1);
        }
        self.next_id = id.checked_add(1).unwrap_or(1);
        id
    }

    /// Replaces the mutable fields of `id`. Returns `false` when it is absent.
    pub fn update(&mut self, id: ProductId, draft: ValidDraft) -> bool {
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.on_update(draft);
                true
            }
            None => {
                debug!(product_id = %id, "Update target missing, ignoring");
                false
            }
        }
    }

    /// Removes `id` if present.
    pub fn delete(&mut self, id: ProductId) -> Option<Product> {
        match self.products.iter().position(|p| p.id == id) {
            Some(index) => Some(self.products.remove(index)),
            None => {
                debug!(product_id = %id, "Delete target missing, ignoring");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductDraft;
    use crate::validation::validate;

    const PLACEHOLDER: &str = "https://placehold.co/600x400";

    fn valid(store: &CatalogStore, draft: ProductDraft, editing: Option<ProductId>) -> ValidDraft {
        validate(&draft, store.products(), editing).unwrap()
    }

    fn seeded() -> CatalogStore {
        let mut store = CatalogStore::new(PLACEHOLDER);
        store.load(vec![
            Product::new(1, "Hat", 10.0, 3, "hat.jpg"),
            Product::new(4, "Chair", 20.0, 4, "chair.jpg"),
        ]);
        store
    }

    #[test]
    fn test_create_mints_id_above_loaded_max() {
        let mut store = seeded();
        let draft = valid(&store, ProductDraft::new("Lamp", 5.0, 2), None);
        let id = store.create(draft);

        assert_eq!(id, 5);
        let lamp = store.get(id).unwrap();
        assert_eq!(lamp.image, PLACEHOLDER);
        assert_eq!(store.products().last().unwrap().name, "Lamp");
    }

    #[test]
    fn test_rapid_creates_never_collide() {
        let mut store = seeded();
        let mut ids = Vec::new();
        for i in 0..50 {
            let draft = valid(&store, ProductDraft::new(format!("Item {i}"), 1.0, 1), None);
            ids.push(store.create(draft));
        }
        let mut all: Vec<ProductId> = store.products().iter().map(|p| p.id).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), store.len());
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = seeded();
        let draft = valid(&store, ProductDraft::new("Lamp", 5.0, 2), None);
        let first = store.create(draft);
        store.delete(first);

        let draft = valid(&store, ProductDraft::new("Plate", 5.0, 2), None);
        let second = store.create(draft);
        assert!(second > first);
    }

    #[test]
    fn test_load_at_id_ceiling_keeps_minting_distinct_ids() {
        let mut store = CatalogStore::new(PLACEHOLDER);
        store.load(vec![
            Product::new(ProductId::MAX, "Max", 1.0, 1, "max.jpg"),
            Product::new(1, "Hat", 10.0, 3, "hat.jpg"),
        ]);

        let draft = valid(&store, ProductDraft::new("Lamp", 5.0, 2), None);
        let first = store.create(draft);
        let draft = valid(&store, ProductDraft::new("Plate", 5.0, 2), None);
        let second = store.create(draft);

        assert_eq!((first, second), (2, 3));
        let mut ids: Vec<ProductId> = store.products().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_load_drops_duplicate_ids_and_names() {
        let mut store = CatalogStore::new(PLACEHOLDER);
        store.load(vec![
            Product::new(1, "Hat", 10.0, 3, "hat.jpg"),
            Product::new(1, "Lamp", 7.0, 2, "lamp.jpg"),
            Product::new(2, "Hat", 11.0, 4, "other-hat.jpg"),
            Product::new(3, "Chair", 20.0, 4, "chair.jpg"),
        ]);

        let kept: Vec<(ProductId, &str)> = store
            .products()
            .iter()
            .map(|p| (p.id, p.name.as_str()))
            .collect();
        assert_eq!(kept, [(1, "Hat"), (3, "Chair")]);
        assert_eq!(store.get(1).unwrap().image, "hat.jpg");

        let draft = valid(&store, ProductDraft::new("Lamp", 5.0, 2), None);
        assert_eq!(store.create(draft), 4);
    }

    #[test]
    fn test_create_uses_draft_image_when_given() {
        let mut store = seeded();
        let draft = ProductDraft::new("Lamp", 5.0, 2).with_image("lamp.jpg");
        let id = store.create(valid(&store, draft, None));
        assert_eq!(store.get(id).unwrap().image, "lamp.jpg");
    }

    #[test]
    fn test_update_preserves_id_and_image() {
        let mut store = seeded();
        let draft = valid(&store, ProductDraft::new("Black Hat", 11.0, 9), Some(1));
        assert!(store.update(1, draft));

        let hat = store.get(1).unwrap();
        assert_eq!(hat.name, "Black Hat");
        assert_eq!(hat.price, 11.0);
        assert_eq!(hat.stock, 9);
        assert_eq!(hat.image, "hat.jpg");
        assert_eq!(store.products()[0].id, 1);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut store = seeded();
        let before = store.products().to_vec();
        let draft = valid(&store, ProductDraft::new("Ghost", 1.0, 1), Some(99));
        assert!(!store.update(99, draft));
        assert_eq!(store.products(), before.as_slice());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = seeded();
        assert_eq!(store.delete(1).map(|p| p.name), Some("Hat".to_string()));
        let after_first = store.products().to_vec();

        assert_eq!(store.delete(1), None);
        assert_eq!(store.delete(42), None);
        assert_eq!(store.products(), after_first.as_slice());
    }
}
