//! Pure view-descriptions: data structures describing what the UI should
//! show, decoupled from any rendering mechanism.
//!
//! Every state change re-derives these wholesale from current state (full
//! re-render, no diffing). The rendering layer translates them into concrete
//! UI primitives and reports interactions back as typed
//! [`crate::session::UiEvent`]s instead of string-based dispatch.

use dukkan_core::ProductId;

use crate::cart::Cart;
use crate::catalog::Product;
use crate::gallery::Gallery;
use crate::search::SearchResults;

/// Shown in the cart panel when no lines exist.
pub const EMPTY_CART_MESSAGE: &str = "السلة فارغة";
/// Shown in the grid when an active filter matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "لا توجد منتجات مطابقة";

/// Complete description of the storefront UI for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontView {
    pub grid: ProductGridView,
    pub cart: CartPanelView,
    /// Present while a product detail view is open.
    pub gallery: Option<GalleryView>,
    /// Whether the cart sidebar is open.
    pub cart_open: bool,
    /// Whether the checkout form is open.
    pub checkout_open: bool,
}

/// The product grid region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductGridView {
    /// Normalized query the grid reflects; empty when no filter is active.
    pub query: String,
    pub cards: Vec<ProductCard>,
    /// The empty-state message, only when a filter is active and matched
    /// nothing. An unfiltered empty catalog renders as a bare grid instead.
    pub empty_message: Option<&'static str>,
}

impl ProductGridView {
    /// Derive the grid from search results.
    #[must_use]
    pub fn from_results(results: &SearchResults<'_>, currency_suffix: &str) -> Self {
        let empty_message = (results.is_filtered() && results.is_empty())
            .then_some(NO_RESULTS_MESSAGE);

        Self {
            query: results.query().to_string(),
            cards: results
                .products()
                .iter()
                .map(|product| ProductCard::from_product(product, currency_suffix))
                .collect(),
            empty_message,
        }
    }
}

/// One card in the product grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub price_display: String,
    /// Struck-through previous price, when the product has one.
    pub old_price_display: Option<String>,
}

impl ProductCard {
    #[must_use]
    pub fn from_product(product: &Product, currency_suffix: &str) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            price_display: format!("{} {currency_suffix}", product.price.display_short()),
            old_price_display: product
                .old_price
                .map(|p| format!("{} {currency_suffix}", p.display_short())),
        }
    }
}

/// The cart sidebar region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPanelView {
    /// Badge count: sum of all line quantities.
    pub badge_count: u32,
    pub rows: Vec<CartRow>,
    /// Fixed two-decimal total, e.g. `10000.00 ج.م`.
    pub total_display: String,
    /// The empty-cart message when no lines exist.
    pub empty_message: Option<&'static str>,
}

impl CartPanelView {
    /// Derive the panel from cart state. Every field is a function of the
    /// cart alone; the cart stays the single source of truth.
    #[must_use]
    pub fn from_cart(cart: &Cart, currency_suffix: &str) -> Self {
        Self {
            badge_count: cart.total_quantity(),
            rows: cart
                .lines()
                .iter()
                .map(|line| CartRow {
                    product_id: line.product.id,
                    name: line.product.name.clone(),
                    image: line.product.image.clone(),
                    unit_price_display: format!(
                        "{} {currency_suffix}",
                        line.product.price.display_short()
                    ),
                    quantity: line.quantity,
                    line_total_display: format!(
                        "{} {currency_suffix}",
                        line.line_total().display_short()
                    ),
                })
                .collect(),
            total_display: format!("{} {currency_suffix}", cart.subtotal().display_fixed()),
            empty_message: cart.is_empty().then_some(EMPTY_CART_MESSAGE),
        }
    }
}

/// One row in the cart sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub unit_price_display: String,
    pub quantity: u32,
    pub line_total_display: String,
}

/// The enlarged product detail view with its image slider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub product_id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price_display: String,
    pub old_price_display: Option<String>,
    /// Resolved image set (never empty).
    pub images: Vec<String>,
    /// Index of the displayed image; one dot control per entry in `images`.
    pub active_index: usize,
}

impl GalleryView {
    /// Derive the detail view, or `None` when no product is open.
    #[must_use]
    pub fn from_gallery(gallery: &Gallery, currency_suffix: &str) -> Option<Self> {
        let product = gallery.product()?;
        let active_index = gallery.image_index()?;

        Some(Self {
            product_id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price_display: format!("{} {currency_suffix}", product.price.display_short()),
            old_price_display: product
                .old_price
                .map(|p| format!("{} {currency_suffix}", p.display_short())),
            images: product.image_set().to_vec(),
            active_index,
        })
    }
}
