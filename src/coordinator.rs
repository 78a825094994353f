//! Sequences form and delete-confirmation intent with the validation gate and the store.

use tracing::{debug, info, warn};

use crate::domain::{Product, ProductDraft, ProductId};
use crate::error::CatalogError;
use crate::store::CatalogStore;
use crate::validation::validate;

/// State of the product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormIntent {
    #[default]
    Closed,
    Creating,
    Editing(ProductId),
}

impl FormIntent {
    /// Identity handed to the validation gate.
    pub fn editing_id(&self) -> Option<ProductId> {
        match self {
            FormIntent::Editing(id) => Some(*id),
            _ => None,
        }
    }
}

/// Outcome of a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Committed {
    Created(ProductId),
    Updated(ProductId),
    /// The edited product was gone by the time the draft landed; nothing was stored.
    Vanished(ProductId),
}

/// The only caller of the mutating store commands.
///
/// Holds which product is being edited or is awaiting delete confirmation;
/// the store itself is passed in on every call.
#[derive(Debug, Default)]
pub struct MutationCoordinator {
    form: FormIntent,
    pending_delete: Option<ProductId>,
}

impl MutationCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> FormIntent {
        self.form
    }

    pub fn pending_delete(&self) -> Option<ProductId> {
        self.pending_delete
    }

    /// Opens the form for a new product and returns the blank draft.
    pub fn begin_create(&mut self) -> ProductDraft {
        self.form = FormIntent::Creating;
        ProductDraft::default()
    }

    /// Opens the form on an existing product and returns its prefilled draft.
    ///
    /// Returns `None` and leaves the form untouched when `id` is gone.
    pub fn begin_edit(&mut self, store: &CatalogStore, id: ProductId) -> Option<ProductDraft> {
        let product = store.get(id)?;
        self.form = FormIntent::Editing(id);
        Some(ProductDraft::from(product))
    }

    pub fn close_form(&mut self) {
        self.form = FormIntent::Closed;
    }

    /// Validates `draft` against the open form and commits it.
    ///
    /// # Errors
    /// - [`CatalogError::NoActiveForm`] when no form is open
    /// - [`CatalogError::Rejected`] when the gate refuses the draft; the form stays open
    ///
    /// An edit whose target disappeared closes the form and yields
    /// [`Committed::Vanished`].
    pub fn submit(
        &mut self,
        store: &mut CatalogStore,
        draft: &ProductDraft,
    ) -> Result<Committed, CatalogError> {
        if self.form == FormIntent::Closed {
            return Err(CatalogError::NoActiveForm);
        }

        let editing = self.form.editing_id();
        let valid = validate(draft, store.products(), editing).map_err(|e| {
            warn!(product_name = %draft.name, field = e.field(), error = %e, "Draft rejected");
            e
        })?;

        let committed = match editing {
            Some(id) => {
                if store.update(id, valid) {
                    info!(product_id = %id, product_name = %draft.name, "Product updated");
                    Committed::Updated(id)
                } else {
                    debug!(product_id = %id, "Edited product no longer exists, closing form");
                    Committed::Vanished(id)
                }
            }
            None => {
                let id = store.create(valid);
                info!(product_id = %id, product_name = %draft.name, "Product created");
                Committed::Created(id)
            }
        };

        self.form = FormIntent::Closed;
        Ok(committed)
    }

    /// Arms the delete confirmation and returns the product it names.
    pub fn request_delete(&mut self, store: &CatalogStore, id: ProductId) -> Option<Product> {
        let product = store.get(id)?.clone();
        self.pending_delete = Some(id);
        Some(product)
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Deletes the armed target, if any, and disarms.
    ///
    /// Closes the form when it was editing the deleted product.
    pub fn confirm_delete(&mut self, store: &mut CatalogStore) -> Option<ProductId> {
        let Some(id) = self.pending_delete.take() else {
            debug!("Delete confirmed with nothing armed");
            return None;
        };
        let removed = store.delete(id)?;
        if self.form == FormIntent::Editing(id) {
            self.form = FormIntent::Closed;
        }
        info!(product_id = %id, product_name = %removed.name, "Product deleted");
        Some(id)
    }
}
