//! Integration tests for Dukkan.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p dukkan-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_flow` - End-to-end session event flows
//! - `checkout_totals` - Composer/cart total agreement and message format
//!
//! The helpers below build a fixture catalog and configuration shaped like
//! the real store data, so every test starts from a fresh session.

use std::sync::Arc;

use dukkan_widget::catalog::Catalog;
use dukkan_widget::config::StoreConfig;
use dukkan_widget::session::StorefrontSession;

/// Catalog fixture mirroring the live store data: one multi-image product,
/// one single-image product, and a cheap fractional-price product.
#[must_use]
pub fn fixture_catalog() -> Catalog {
    Catalog::from_json(
        r#"{
            "products": [
                {
                    "id": 1,
                    "name": "Sutiafeed شفاط حليب الثدي",
                    "price": 5000,
                    "old_price": 6500,
                    "description": "شفاط حليب مريح وبدون ألم، شاشة LED لسهولة التحكم",
                    "image": "assets/12.jpg",
                    "images": ["assets/12.jpg", "assets/12.jpg", "assets/3333.jpg"],
                    "category_id": 2
                },
                {
                    "id": 2,
                    "name": "جهاز سكر بايو تست",
                    "price": 350,
                    "old_price": 400,
                    "description": "جهاز قياس السكر",
                    "image": "assets/images.jpeg",
                    "category_id": 1
                },
                {
                    "id": 3,
                    "name": "Gauze roll",
                    "price": 12.5,
                    "image": "assets/gauze.jpg",
                    "category_id": null
                }
            ],
            "categories": [
                { "id": 1, "name": "اجهزة سكر", "image": "assets/cat1.jpg" },
                { "id": 2, "name": "العناية بالأم", "image": "assets/cat2.jpg" }
            ]
        }"#,
    )
    .expect("fixture catalog is well-formed")
}

/// Store configuration fixture.
#[must_use]
pub fn fixture_config() -> StoreConfig {
    StoreConfig {
        store_name: "ORIGINAL_MED".to_string(),
        whatsapp_recipient: "201068672360".to_string(),
        currency_suffix: "ج.م".to_string(),
        catalog_path: "data/products.json".into(),
    }
}

/// A fresh session over the fixture catalog.
#[must_use]
pub fn fixture_session() -> StorefrontSession {
    StorefrontSession::new(fixture_config(), Arc::new(fixture_catalog()))
}
