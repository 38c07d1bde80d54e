//! In-memory shopping cart.
//!
//! The cart aggregates quantities per product id: one line per distinct
//! product, created on first add and incremented on repeat adds. Removal
//! always deletes the whole line; the UI exposes no decrement-by-one.
//!
//! Lines hold a snapshot of the product taken at add time, so a price change
//! in the catalog never retroactively alters a line already in the cart.
//! The cart is the single source of truth for every cart-derived view
//! (badge count, item rows, total).

use dukkan_core::{Price, ProductId};

use crate::catalog::{Catalog, Product};

/// One aggregated cart entry: a product snapshot and its quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Snapshot of the product at add time.
    pub product: Product,
    /// Always >= 1; a line with quantity 0 never exists.
    pub quantity: u32,
}

impl CartLine {
    /// Price × quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Ordered cart: lines appear in first-added order.
///
/// Owned by the session and injectable, so tests construct a fresh cart
/// instead of sharing ambient global state.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// An unknown product id is a silent no-op; it is logged but never
    /// surfaced, so a stale control in the rendering layer cannot crash the
    /// session.
    pub fn add(&mut self, catalog: &Catalog, id: ProductId) {
        let Some(product) = catalog.product(id) else {
            tracing::warn!(%id, "Ignoring add-to-cart for unknown product id");
            return;
        };

        if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
        }
    }

    /// Remove the entire line for a product. No-op when absent.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product.id != id);
    }

    /// Sum of all line quantities (the badge count).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum over lines of price × quantity, as an exact decimal.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Lines in first-added order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rust_decimal::Decimal;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{
                "products": [
                    { "id": 1, "name": "Sutiafeed شفاط حليب الثدي", "price": 5000, "image": "a.jpg" },
                    { "id": 2, "name": "جهاز سكر بايو تست", "price": 350, "image": "b.jpg" },
                    { "id": 3, "name": "Gauze", "price": 0.10, "image": "c.jpg" }
                ]
            }"#,
        )
        .unwrap()
    }

    fn price(s: &str) -> Price {
        Price::new(s.parse::<Decimal>().unwrap())
    }

    #[test]
    fn test_repeat_adds_aggregate_into_one_line() {
        let catalog = catalog();
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add(&catalog, ProductId::new(1));
        }
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_quantity(), 5);
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn test_scenario_two_adds_of_product_one() {
        // Product {id:1, name:"Sutiafeed شفاط حليب الثدي", price:5000}, added twice
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new(1));
        cart.add(&catalog, ProductId::new(1));
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal(), price("10000"));
        assert_eq!(cart.subtotal().display_fixed(), "10000.00");
    }

    #[test]
    fn test_unknown_id_is_silent_noop() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new(99));
        assert!(cart.is_empty());
        cart.remove(ProductId::new(99));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_deletes_whole_line() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new(1));
        cart.add(&catalog, ProductId::new(1));
        cart.add(&catalog, ProductId::new(2));
        cart.remove(ProductId::new(1));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].product.id, ProductId::new(2));
    }

    #[test]
    fn test_readd_after_remove_starts_at_quantity_one() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new(1));
        cart.add(&catalog, ProductId::new(1));
        cart.remove(ProductId::new(1));
        cart.add(&catalog, ProductId::new(1));
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_lines_keep_first_added_order() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new(2));
        cart.add(&catalog, ProductId::new(1));
        cart.add(&catalog, ProductId::new(2));
        let ids: Vec<_> = cart.lines().iter().map(|l| l.product.id).collect();
        assert_eq!(ids, [ProductId::new(2), ProductId::new(1)]);
    }

    #[test]
    fn test_snapshot_semantics_survive_catalog_changes() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new(2));

        // A "newer" catalog where product 2 got more expensive
        let repriced = Catalog::from_json(
            r#"{ "products": [ { "id": 2, "name": "جهاز سكر بايو تست", "price": 999, "image": "b.jpg" } ] }"#,
        )
        .unwrap();
        cart.add(&repriced, ProductId::new(2));

        // The line keeps its add-time snapshot price
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.subtotal(), price("700"));
    }

    #[test]
    fn test_no_drift_across_many_add_remove_cycles() {
        let catalog = catalog();
        let mut cart = Cart::new();
        for _ in 0..500 {
            cart.add(&catalog, ProductId::new(3));
            cart.add(&catalog, ProductId::new(3));
            cart.remove(ProductId::new(3));
            cart.add(&catalog, ProductId::new(3));
        }
        // Each cycle nets exactly one unit at 0.10
        assert_eq!(cart.total_quantity(), 500);
        assert_eq!(cart.subtotal(), price("50"));
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.subtotal(), Price::ZERO);
    }
}
