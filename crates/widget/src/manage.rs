//! Catalog management: store-owner operations that edit the catalog
//! document on disk.
//!
//! The storefront widget only ever reads the catalog; adding and removing
//! products is owner tooling, driven from the CLI. Every edit round-trips
//! through [`Catalog`], so the unique-id invariant is re-checked before
//! anything is written back and a bad edit can never corrupt the document.
//!
//! Unknown ids are hard errors here, unlike the widget's silent-no-op UI
//! events: a mistyped owner command must fail loudly.

use std::path::Path;

use thiserror::Error;

use dukkan_core::{CategoryId, Price, ProductId};

use crate::catalog::{Catalog, CatalogError, Product};

/// Cover image used when a product is created without any images.
const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300";

/// Catalog management errors.
#[derive(Debug, Error)]
pub enum ManageError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("product name must not be empty")]
    EmptyName,
    #[error("no product with id {0} in catalog")]
    UnknownProductId(ProductId),
}

/// Fields for a product being added. The id is allocated on insert.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Price,
    pub old_price: Option<Price>,
    pub description: Option<String>,
    /// Gallery images in display order; the first becomes the cover image.
    pub images: Vec<String>,
    pub category_id: Option<CategoryId>,
}

/// Add a product to the catalog document at `path` and persist it.
///
/// The new id is the highest existing id plus one. The first entry of
/// `images` becomes the cover `image` (a placeholder URL when no images are
/// given), and an empty `images` list is stored as absent so the gallery
/// fallback rule applies unchanged.
///
/// # Errors
///
/// Returns an error if the name is blank, or the document fails to load,
/// re-validate, or write back.
pub fn add_product(path: &Path, new: NewProduct) -> Result<Product, ManageError> {
    let name = new.name.trim();
    if name.is_empty() {
        return Err(ManageError::EmptyName);
    }

    let catalog = Catalog::load(path)?;

    let image = new
        .images
        .first()
        .cloned()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let product = Product {
        id: next_id(&catalog),
        name: name.to_string(),
        price: new.price,
        old_price: new.old_price,
        description: new.description,
        image,
        images: (!new.images.is_empty()).then_some(new.images),
        category_id: new.category_id,
    };

    let mut products = catalog.products().to_vec();
    products.push(product.clone());
    let updated = Catalog::new(products, catalog.categories().to_vec())?;
    updated.save(path)?;

    tracing::info!(id = %product.id, name = %product.name, "Added product to catalog");
    Ok(product)
}

/// Remove a product from the catalog document at `path` and persist it.
///
/// # Errors
///
/// Returns `ManageError::UnknownProductId` if no product has `id`, or a
/// `CatalogError` if the document fails to load or write back.
pub fn remove_product(path: &Path, id: ProductId) -> Result<Product, ManageError> {
    let catalog = Catalog::load(path)?;

    let removed = catalog
        .product(id)
        .cloned()
        .ok_or(ManageError::UnknownProductId(id))?;

    let products = catalog
        .products()
        .iter()
        .filter(|product| product.id != id)
        .cloned()
        .collect();
    let updated = Catalog::new(products, catalog.categories().to_vec())?;
    updated.save(path)?;

    tracing::info!(%id, name = %removed.name, "Removed product from catalog");
    Ok(removed)
}

/// Highest existing product id plus one; 1 for an empty catalog.
fn next_id(catalog: &Catalog) -> ProductId {
    let max = catalog
        .products()
        .iter()
        .map(|product| product.id.as_i32())
        .max()
        .unwrap_or(0);
    ProductId::new(max + 1)
}
