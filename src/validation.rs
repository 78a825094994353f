//! The validation gate every mutation passes through before it reaches the store.

use crate::domain::{Product, ProductDraft, ProductId};
use crate::error::ValidationError;

/// A draft that passed [`validate`].
///
/// Only this module can build one, so holding a `ValidDraft` means the gate
/// has admitted the payload against some catalog state.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    name: String,
    price: f64,
    stock: u32,
    image: Option<String>,
}

impl ValidDraft {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub(crate) fn into_parts(self) -> (String, f64, u32, Option<String>) {
        (self.name, self.price, self.stock, self.image)
    }
}

/// Decides whether `draft` may be committed.
///
/// `editing` is the id of the product being edited, `None` on the create path.
/// Checks run in order and the first violation is returned.
pub fn validate(
    draft: &ProductDraft,
    catalog: &[Product],
    editing: Option<ProductId>,
) -> Result<ValidDraft, ValidationError> {
    if draft.name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if !valid_price(draft.price) {
        return Err(ValidationError::InvalidPrice);
    }
    let stock = valid_stock(draft.stock).ok_or(ValidationError::InvalidStock)?;
    if name_conflicts(&draft.name, catalog, editing) {
        return Err(ValidationError::DuplicateName);
    }

    Ok(ValidDraft {
        name: draft.name.clone(),
        price: draft.price,
        stock,
        image: draft.image.clone(),
    })
}

/// Every violation of `draft`, in check order. Empty when the draft is valid.
pub fn validate_all(
    draft: &ProductDraft,
    catalog: &[Product],
    editing: Option<ProductId>,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if draft.name.is_empty() {
        errors.push(ValidationError::NameRequired);
    }
    if !valid_price(draft.price) {
        errors.push(ValidationError::InvalidPrice);
    }
    if valid_stock(draft.stock).is_none() {
        errors.push(ValidationError::InvalidStock);
    }
    if !draft.name.is_empty() && name_conflicts(&draft.name, catalog, editing) {
        errors.push(ValidationError::DuplicateName);
    }
    errors
}

fn valid_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

fn valid_stock(stock: i64) -> Option<u32> {
    u32::try_from(stock).ok().filter(|stock| *stock > 0)
}

// A product may keep its own name while being edited, but never take another's.
fn name_conflicts(name: &str, catalog: &[Product], editing: Option<ProductId>) -> bool {
    catalog
        .iter()
        .any(|product| product.name == name && Some(product.id) != editing)
}
