//! Order simulation command: fill a cart, compose the message, print the
//! WhatsApp deep-link that a browser session would open.
//!
//! # Environment Variables
//!
//! - `DUKKAN_STORE_NAME` - Store name for the message header
//! - `DUKKAN_WHATSAPP_RECIPIENT` - Deep-link recipient
//! - `DUKKAN_CATALOG_PATH` - Path to the catalog JSON document

use std::sync::Arc;

use thiserror::Error;

use dukkan_core::ProductId;
use dukkan_widget::catalog::Catalog;
use dukkan_widget::checkout::{self, Customer};
use dukkan_widget::config::StoreConfig;
use dukkan_widget::session::{Effect, StorefrontSession, UiEvent};

/// Errors specific to the order command.
#[derive(Debug, Error)]
pub enum OrderError {
    /// An `--item` flag referenced an id missing from the catalog.
    #[error("Unknown product id: {0}")]
    UnknownProduct(i32),

    /// The session rejected the checkout.
    #[error("Checkout rejected: {0}")]
    Rejected(&'static str),
}

/// Simulate a cart from repeated `--item` flags and print the composed
/// order message and deep-link.
///
/// # Errors
///
/// Returns an error if configuration or the catalog fails to load, an item
/// id is unknown, or the session rejects the checkout.
pub fn submit(
    name: &str,
    phone: &str,
    address: &str,
    items: &[i32],
) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    let catalog = Arc::new(Catalog::load(&config.catalog_path)?);

    let mut session = StorefrontSession::new(config, catalog);

    for &raw_id in items {
        let id = ProductId::new(raw_id);
        // The widget treats unknown ids as silent no-ops; a mistyped CLI
        // flag should fail loudly instead.
        if session.catalog().product(id).is_none() {
            return Err(OrderError::UnknownProduct(raw_id).into());
        }
        session.handle(UiEvent::AddToCart(id));
    }

    let customer = Customer {
        name: name.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
    };

    if let Effect::Notice(notice) = session.handle(UiEvent::OpenCheckout) {
        return Err(OrderError::Rejected(notice.message()).into());
    }

    let message = checkout::compose_order(session.config(), &customer, session.cart().lines());

    match session.handle(UiEvent::SubmitOrder(customer)) {
        Effect::OpenUrl(url) => {
            print_order(&message, url.as_str());
            Ok(())
        }
        Effect::Notice(notice) => Err(OrderError::Rejected(notice.message()).into()),
        Effect::None => Err(OrderError::Rejected("no deep-link produced").into()),
    }
}

#[allow(clippy::print_stdout)]
fn print_order(message: &str, url: &str) {
    println!("{message}");
    println!();
    println!("{url}");
}
