//! Checkout message composition and WhatsApp deep-link building.
//!
//! Checkout has no network responsibility here: the composer turns the cart
//! and the customer-entered fields into one formatted text block, and the
//! link builder percent-encodes that block into a `https://wa.me/<recipient>`
//! URL. Opening the link is the rendering layer's fire-and-forget job.
//!
//! Customer free text is embedded verbatim; the only encoding applied is the
//! percent-encoding of the whole message for the transport URL.

use url::Url;

use crate::cart::CartLine;
use crate::config::StoreConfig;

const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Customer fields entered in the checkout form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Compose the order message for a non-empty cart.
///
/// Layout: store header, blank line, labeled customer fields, blank line,
/// one line per cart line, blank line, grand total. The grand total is
/// summed here, independently of the cart engine, and the two must agree.
///
/// The session rejects empty-cart checkouts before ever calling this; an
/// empty slice simply yields a message with no item lines and a zero total.
#[must_use]
pub fn compose_order(config: &StoreConfig, customer: &Customer, lines: &[CartLine]) -> String {
    let suffix = &config.currency_suffix;

    let mut message = format!("*طلب جديد من متجر {}*\n\n", config.store_name);
    message.push_str(&format!("*الاسم:* {}\n", customer.name));
    message.push_str(&format!("*الهاتف:* {}\n", customer.phone));
    message.push_str(&format!("*العنوان:* {}\n", customer.address));
    message.push_str("\n*الطلبات:* \n");

    let mut total = dukkan_core::Price::ZERO;
    for line in lines {
        let line_total = line.line_total();
        total += line_total;
        message.push_str(&format!(
            "- {} ({} × {} {suffix}) = {} {suffix}\n",
            line.product.name,
            line.quantity,
            line.product.price.display_short(),
            line_total.display_short(),
        ));
    }

    message.push_str(&format!(
        "\n*الإجمالي:* {} {suffix}",
        total.display_short()
    ));

    message
}

/// Build the deep-link that opens WhatsApp pre-filled with `message`.
///
/// The recipient comes from configuration, never from input.
///
/// # Errors
///
/// Returns `url::ParseError` only if the configured recipient does not form
/// a valid URL path segment; a recipient that passed config validation
/// (digits only) always parses.
pub fn order_link(config: &StoreConfig, message: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!(
        "{WHATSAPP_BASE_URL}/{}?text={}",
        config.whatsapp_recipient,
        urlencoding::encode(message),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::Catalog;

    fn config() -> StoreConfig {
        StoreConfig {
            store_name: "ORIGINAL_MED".to_string(),
            whatsapp_recipient: "201068672360".to_string(),
            currency_suffix: "ج.م".to_string(),
            catalog_path: "data/products.json".into(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{
                "products": [
                    { "id": 1, "name": "A", "price": 300, "image": "a.jpg" },
                    { "id": 2, "name": "B", "price": 5, "image": "b.jpg" }
                ]
            }"#,
        )
        .unwrap()
    }

    fn customer() -> Customer {
        Customer {
            name: "أحمد".to_string(),
            phone: "01000000000".to_string(),
            address: "القاهرة، مدينة نصر".to_string(),
        }
    }

    #[test]
    fn test_message_layout() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, dukkan_core::ProductId::new(1));
        cart.add(&catalog, dukkan_core::ProductId::new(1));
        cart.add(&catalog, dukkan_core::ProductId::new(2));

        let message = compose_order(&config(), &customer(), cart.lines());

        let expected = "*طلب جديد من متجر ORIGINAL_MED*\n\n\
                        *الاسم:* أحمد\n\
                        *الهاتف:* 01000000000\n\
                        *العنوان:* القاهرة، مدينة نصر\n\n\
                        *الطلبات:* \n\
                        - A (2 × 300 ج.م) = 600 ج.م\n\
                        - B (1 × 5 ج.م) = 5 ج.م\n\n\
                        *الإجمالي:* 605 ج.م";
        assert_eq!(message, expected);
    }

    #[test]
    fn test_grand_total_matches_cart_subtotal() {
        // Cart [{A, 300, qty 2}, {B, 5, qty 1}] → total line reads 605
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, dukkan_core::ProductId::new(1));
        cart.add(&catalog, dukkan_core::ProductId::new(1));
        cart.add(&catalog, dukkan_core::ProductId::new(2));

        let message = compose_order(&config(), &customer(), cart.lines());
        let total_line = message.lines().last().unwrap();
        assert_eq!(
            total_line,
            format!("*الإجمالي:* {} ج.م", cart.subtotal().display_short())
        );
        assert!(total_line.contains("605"));
    }

    #[test]
    fn test_customer_text_is_embedded_verbatim() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, dukkan_core::ProductId::new(2));

        let tricky = Customer {
            name: "a & b = c?".to_string(),
            phone: "+20 100".to_string(),
            address: "شارع 10\nالدور الثالث".to_string(),
        };
        let message = compose_order(&config(), &tricky, cart.lines());
        assert!(message.contains("*الاسم:* a & b = c?"));
        assert!(message.contains("شارع 10\nالدور الثالث"));
    }

    #[test]
    fn test_order_link_shape() {
        let cfg = config();
        let url = order_link(&cfg, "hello order").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/201068672360");
        assert!(url.query().unwrap().starts_with("text="));
    }

    #[test]
    fn test_order_link_percent_encoding_round_trips() {
        let cfg = config();
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, dukkan_core::ProductId::new(1));

        let message = compose_order(&cfg, &customer(), cart.lines());
        let url = order_link(&cfg, &message).unwrap();

        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "text");
        assert_eq!(value, message);

        // encodeURIComponent-style: no raw spaces or '+' placeholders
        let query = url.query().unwrap();
        assert!(!query.contains(' '));
        assert!(!query.contains('+'));
        assert!(query.contains("%20"));
    }
}
