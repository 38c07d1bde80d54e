//! Static product catalog loaded once at startup.
//!
//! The catalog is an immutable list of products and categories, read from a
//! JSON document of the form:
//!
//! ```json
//! {
//!   "products": [
//!     { "id": 1, "name": "...", "price": 5000, "image": "assets/12.jpg",
//!       "old_price": 6500, "description": "...", "category_id": 2,
//!       "images": ["assets/12.jpg", "assets/3333.jpg"] }
//!   ],
//!   "categories": [
//!     { "id": 2, "name": "...", "image": "assets/3333.jpg" }
//!   ]
//! }
//! ```
//!
//! The widget only ever reads from the catalog; nothing mutates it after
//! load. Malformed entries and duplicate product ids are rejected at load
//! time rather than surfacing as undefined behavior later.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dukkan_core::{CategoryId, Price, ProductId};

/// A product as displayed in the storefront grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Caller-assigned id, unique within the catalog.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current unit price.
    pub price: Price,
    /// Optional struck-through previous price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<Price>,
    /// Optional long description shown in the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Primary asset reference; always the single-image fallback.
    pub image: String,
    /// Ordered gallery images; when present and non-empty these supersede
    /// `image` for gallery display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Loose category reference. Not a foreign key; may be absent or null.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

impl Product {
    /// Resolve the gallery image set for this product.
    ///
    /// A non-empty `images` list wins; otherwise the set is the one-element
    /// slice containing `image`. Every caller that needs the set resolves it
    /// through here so the rule cannot diverge between open/next/jump.
    #[must_use]
    pub fn image_set(&self) -> &[String] {
        match &self.images {
            Some(images) if !images.is_empty() => images.as_slice(),
            _ => std::slice::from_ref(&self.image),
        }
    }
}

/// A product category. Inert display data in the current widget; no
/// filtering-by-category exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub image: String,
}

/// Raw document shape of a catalog file.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    products: Vec<Product>,
    #[serde(default)]
    categories: Vec<Category>,
}

/// Catalog load errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id {0} in catalog")]
    DuplicateProductId(ProductId),
}

/// The full, static set of products and categories available for display.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from already-deserialized records.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateProductId` if two products share an id.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateProductId(product.id));
            }
        }

        Ok(Self {
            products,
            categories,
            index,
        })
    }

    /// Parse a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed (missing required
    /// fields included) or violates the unique-id invariant.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.products, document.categories)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            path = %path.display(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Write the catalog back to disk as a pretty-printed JSON document.
    ///
    /// Absent optional fields are omitted from the output, not written as
    /// null, so a saved document round-trips through [`Catalog::load`].
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let document = CatalogDocument {
            products: self.products.clone(),
            categories: self.categories.clone(),
        };
        let json = serde_json::to_string_pretty(&document)?;
        std::fs::write(path, json)?;
        tracing::info!(
            products = self.products.len(),
            path = %path.display(),
            "Saved catalog"
        );
        Ok(())
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories in catalog order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).and_then(|&i| self.products.get(i))
    }

    /// Look up a category by id.
    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
