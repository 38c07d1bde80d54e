//! Product detail / image slider view-model.
//!
//! Tracks which product is open in the enlarged view and which of its
//! gallery images is active. State is transient: it exists only while a
//! detail view is open and is reset whenever a new product opens.
//!
//! Image-set resolution always goes through [`Product::image_set`] on the
//! stored product reference; the resolved list is never cached separately,
//! so the resolution rule cannot diverge between operations.

use dukkan_core::ProductId;

use crate::catalog::{Catalog, Product};

#[derive(Debug, Clone)]
struct ActiveProduct {
    product: Product,
    image_index: usize,
}

/// Slider view state for the product detail view.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    active: Option<ActiveProduct>,
}

impl Gallery {
    /// Create a gallery with no open product.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Open the detail view for a product, resetting the image index to 0.
    ///
    /// Unknown product ids are a silent no-op.
    pub fn open(&mut self, catalog: &Catalog, id: ProductId) {
        let Some(product) = catalog.product(id) else {
            tracing::warn!(%id, "Ignoring detail-view open for unknown product id");
            return;
        };

        self.active = Some(ActiveProduct {
            product: product.clone(),
            image_index: 0,
        });
    }

    /// Close the detail view, clearing product and index.
    pub fn close(&mut self) {
        self.active = None;
    }

    /// Advance to the next image, wrapping past the end back to index 0.
    ///
    /// Idempotent when the image set has a single element; no-op when no
    /// product is open.
    pub fn next(&mut self) {
        if let Some(active) = &mut self.active {
            let count = active.product.image_set().len();
            active.image_index = (active.image_index + 1) % count;
        }
    }

    /// Step back to the previous image, wrapping before index 0 to the end.
    pub fn previous(&mut self) {
        if let Some(active) = &mut self.active {
            let count = active.product.image_set().len();
            active.image_index = (active.image_index + count - 1) % count;
        }
    }

    /// Jump directly to an image index.
    ///
    /// Indices come from the rendered dot controls, one per image, so they
    /// are expected in bounds; anything else is ignored and logged.
    pub fn jump_to(&mut self, index: usize) {
        if let Some(active) = &mut self.active {
            if index < active.product.image_set().len() {
                active.image_index = index;
            } else {
                tracing::warn!(index, "Ignoring out-of-range gallery jump");
            }
        }
    }

    /// The open product, if any.
    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        self.active.as_ref().map(|a| &a.product)
    }

    /// The active image index, if a product is open.
    #[must_use]
    pub fn image_index(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.image_index)
    }

    /// Whether a detail view is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.active.is_some()
    }
}
