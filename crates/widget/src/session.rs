//! The storefront session: typed UI events in, view-descriptions out.
//!
//! One session owns all mutable widget state (cart, gallery, current query,
//! panel flags) for the lifetime of the page. Handlers run synchronously to
//! completion; there is no async work and no shared mutable state. The
//! session is an owned, injectable object; tests construct one per case
//! instead of mutating ambient globals.

use std::sync::Arc;

use url::Url;

use dukkan_core::ProductId;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::checkout::{self, Customer};
use crate::config::StoreConfig;
use crate::gallery::Gallery;
use crate::search;
use crate::view::{CartPanelView, GalleryView, ProductGridView, StorefrontView};

/// A typed user interaction, reported by the rendering layer.
///
/// Identifiers are typed (`ProductId`, image index), not strings embedded in
/// generated markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A keystroke changed the search box contents.
    SearchInput(String),
    /// The search form was explicitly submitted.
    SearchSubmit(String),
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    /// Open or close the cart sidebar.
    ToggleCart,
    OpenProduct(ProductId),
    CloseProduct,
    NextImage,
    PreviousImage,
    JumpToImage(usize),
    OpenCheckout,
    CloseCheckout,
    SubmitOrder(Customer),
}

/// A user-visible blocking notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Checkout was attempted with an empty cart.
    EmptyCart,
}

impl Notice {
    /// The literal text the rendering layer should display.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::EmptyCart => "السلة فارغة!",
        }
    }
}

/// What the rendering layer must do after an event, beyond re-rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing beyond re-deriving the view.
    None,
    /// Show a blocking notice.
    Notice(Notice),
    /// Open an external deep-link, fire-and-forget.
    OpenUrl(Url),
}

/// Session state for one storefront page.
#[derive(Debug, Clone)]
pub struct StorefrontSession {
    config: StoreConfig,
    catalog: Arc<Catalog>,
    cart: Cart,
    gallery: Gallery,
    query: String,
    cart_open: bool,
    checkout_open: bool,
}

impl StorefrontSession {
    /// Create a fresh session over an immutable catalog.
    #[must_use]
    pub fn new(config: StoreConfig, catalog: Arc<Catalog>) -> Self {
        Self {
            config,
            catalog,
            cart: Cart::new(),
            gallery: Gallery::new(),
            query: String::new(),
            cart_open: false,
            checkout_open: false,
        }
    }

    /// Apply one UI event. Runs to completion before the next event.
    pub fn handle(&mut self, event: UiEvent) -> Effect {
        match event {
            // Both search paths converge on the same stored query, so the
            // keystroke path and the submit path always render identically.
            UiEvent::SearchInput(query) | UiEvent::SearchSubmit(query) => {
                self.query = query;
                Effect::None
            }
            UiEvent::AddToCart(id) => {
                self.cart.add(&self.catalog, id);
                // Adding opens the cart sidebar
                self.cart_open = true;
                Effect::None
            }
            UiEvent::RemoveFromCart(id) => {
                self.cart.remove(id);
                Effect::None
            }
            UiEvent::ToggleCart => {
                self.cart_open = !self.cart_open;
                Effect::None
            }
            UiEvent::OpenProduct(id) => {
                self.gallery.open(&self.catalog, id);
                Effect::None
            }
            UiEvent::CloseProduct => {
                self.gallery.close();
                Effect::None
            }
            UiEvent::NextImage => {
                self.gallery.next();
                Effect::None
            }
            UiEvent::PreviousImage => {
                self.gallery.previous();
                Effect::None
            }
            UiEvent::JumpToImage(index) => {
                self.gallery.jump_to(index);
                Effect::None
            }
            UiEvent::OpenCheckout => {
                if self.cart.is_empty() {
                    return Effect::Notice(Notice::EmptyCart);
                }
                self.cart_open = false;
                self.checkout_open = true;
                Effect::None
            }
            UiEvent::CloseCheckout => {
                self.checkout_open = false;
                Effect::None
            }
            UiEvent::SubmitOrder(customer) => self.submit_order(&customer),
        }
    }

    /// Compose the order and hand back the deep-link effect.
    fn submit_order(&mut self, customer: &Customer) -> Effect {
        // Guarded here too: the composer is never invoked on an empty cart.
        if self.cart.is_empty() {
            return Effect::Notice(Notice::EmptyCart);
        }

        let message = checkout::compose_order(&self.config, customer, self.cart.lines());
        self.checkout_open = false;

        // The cart is intentionally left intact after checkout; whether it
        // should clear on a sent order is an open product decision.
        match checkout::order_link(&self.config, &message) {
            Ok(url) => {
                tracing::info!(
                    lines = self.cart.len(),
                    quantity = self.cart.total_quantity(),
                    "Composed order deep-link"
                );
                Effect::OpenUrl(url)
            }
            Err(error) => {
                tracing::error!(%error, "Failed to build order deep-link");
                Effect::None
            }
        }
    }

    /// Derive the complete view-description from current state.
    ///
    /// Pure: same state, same view. Called after every event (full
    /// re-render, no incremental diffing).
    #[must_use]
    pub fn view(&self) -> StorefrontView {
        let suffix = &self.config.currency_suffix;
        let results = search::filter(&self.query, &self.catalog);

        StorefrontView {
            grid: ProductGridView::from_results(&results, suffix),
            cart: CartPanelView::from_cart(&self.cart, suffix),
            gallery: GalleryView::from_gallery(&self.gallery, suffix),
            cart_open: self.cart_open,
            checkout_open: self.checkout_open,
        }
    }

    /// The session's cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The shared catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn session() -> StorefrontSession {
        let catalog = Catalog::from_json(
            r#"{
                "products": [
                    { "id": 1, "name": "Sutiafeed شفاط حليب الثدي", "price": 5000,
                      "image": "a.jpg", "images": ["a.jpg", "b.jpg"] },
                    { "id": 2, "name": "جهاز سكر بايو تست", "price": 350, "image": "x.jpg" }
                ]
            }"#,
        )
        .unwrap();
        let config = StoreConfig {
            store_name: "ORIGINAL_MED".to_string(),
            whatsapp_recipient: "201068672360".to_string(),
            currency_suffix: "ج.م".to_string(),
            catalog_path: "data/products.json".into(),
        };
        StorefrontSession::new(config, Arc::new(catalog))
    }

    fn customer() -> Customer {
        Customer {
            name: "أحمد".to_string(),
            phone: "0100".to_string(),
            address: "القاهرة".to_string(),
        }
    }

    #[test]
    fn test_add_to_cart_updates_view_and_opens_sidebar() {
        let mut session = session();
        assert_eq!(session.handle(UiEvent::AddToCart(ProductId::new(1))), Effect::None);

        let view = session.view();
        assert!(view.cart_open);
        assert_eq!(view.cart.badge_count, 1);
        assert_eq!(view.cart.rows.len(), 1);
    }

    #[test]
    fn test_unknown_product_never_crashes_the_session() {
        let mut session = session();
        session.handle(UiEvent::AddToCart(ProductId::new(99)));
        session.handle(UiEvent::RemoveFromCart(ProductId::new(99)));
        session.handle(UiEvent::OpenProduct(ProductId::new(99)));
        let view = session.view();
        assert_eq!(view.cart.badge_count, 0);
        assert!(view.gallery.is_none());
    }

    #[test]
    fn test_search_input_and_submit_render_identically() {
        let mut a = session();
        a.handle(UiEvent::SearchInput(" جهاز ".to_string()));
        let mut b = session();
        b.handle(UiEvent::SearchSubmit("جهاز".to_string()));
        assert_eq!(a.view().grid, b.view().grid);
    }

    #[test]
    fn test_checkout_blocked_on_empty_cart() {
        let mut session = session();
        let effect = session.handle(UiEvent::OpenCheckout);
        assert_eq!(effect, Effect::Notice(Notice::EmptyCart));
        assert!(!session.view().checkout_open);
        assert_eq!(Notice::EmptyCart.message(), "السلة فارغة!");
    }

    #[test]
    fn test_submit_order_yields_deep_link_and_keeps_cart() {
        let mut session = session();
        session.handle(UiEvent::AddToCart(ProductId::new(1)));
        session.handle(UiEvent::OpenCheckout);
        assert!(session.view().checkout_open);

        let effect = session.handle(UiEvent::SubmitOrder(customer()));
        let Effect::OpenUrl(url) = effect else {
            panic!("expected deep-link effect, got {effect:?}");
        };
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/201068672360");

        // Checkout form closed, cart left intact
        let view = session.view();
        assert!(!view.checkout_open);
        assert_eq!(view.cart.badge_count, 1);
    }

    #[test]
    fn test_gallery_events_drive_detail_view() {
        let mut session = session();
        session.handle(UiEvent::OpenProduct(ProductId::new(1)));
        session.handle(UiEvent::NextImage);
        assert_eq!(session.view().gallery.unwrap().active_index, 1);

        session.handle(UiEvent::JumpToImage(0));
        assert_eq!(session.view().gallery.unwrap().active_index, 0);

        session.handle(UiEvent::PreviousImage);
        assert_eq!(session.view().gallery.unwrap().active_index, 1);

        session.handle(UiEvent::CloseProduct);
        assert!(session.view().gallery.is_none());
    }

    #[test]
    fn test_toggle_cart() {
        let mut session = session();
        assert!(!session.view().cart_open);
        session.handle(UiEvent::ToggleCart);
        assert!(session.view().cart_open);
        session.handle(UiEvent::ToggleCart);
        assert!(!session.view().cart_open);
    }

    #[test]
    fn test_view_is_pure_function_of_state() {
        let mut session = session();
        session.handle(UiEvent::AddToCart(ProductId::new(2)));
        session.handle(UiEvent::SearchInput("جهاز".to_string()));
        assert_eq!(session.view(), session.view());
    }
}
