//! Free-text catalog search.
//!
//! Deliberately simple: trim + lowercase the query, then keep every product
//! whose name or description contains it as a substring, in catalog order.
//! No ranking, no fuzzy matching, no tokenization. The same function backs
//! both the per-keystroke path and the explicit submit path, so the two
//! always converge on identical results.

use crate::catalog::{Catalog, Product};

/// The outcome of filtering the catalog with a query.
///
/// Carries the normalized query so an empty *result* is distinguishable from
/// an empty *filter*: the grid only shows the "no matches" message when
/// [`SearchResults::is_filtered`] is true and the result set is empty.
#[derive(Debug, Clone)]
pub struct SearchResults<'a> {
    query: String,
    products: Vec<&'a Product>,
}

impl<'a> SearchResults<'a> {
    /// The normalized (trimmed, lowercased) query that produced the results.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Matching products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    /// Whether a non-empty query is active.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty()
    }

    /// Whether the result set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of matching products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }
}

/// Filter the catalog with a free-text query.
///
/// An empty (or all-whitespace) query returns the full catalog unchanged, in
/// catalog order. Matching is case-insensitive substring containment on
/// product name or description.
#[must_use]
pub fn filter<'a>(query: &str, catalog: &'a Catalog) -> SearchResults<'a> {
    let query = query.trim().to_lowercase();

    if query.is_empty() {
        return SearchResults {
            query,
            products: catalog.products().iter().collect(),
        };
    }

    let products = catalog
        .products()
        .iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&query)
                || product
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&query))
        })
        .collect();

    SearchResults { query, products }
}
