//! Catalog listing, search, and management commands.
//!
//! # Environment Variables
//!
//! - `DUKKAN_CATALOG_PATH` - Path to the catalog JSON document
//! - `DUKKAN_CURRENCY_SUFFIX` - Currency suffix for displayed amounts

use rust_decimal::Decimal;

use dukkan_core::{CategoryId, Price, ProductId};
use dukkan_widget::catalog::{Catalog, Product};
use dukkan_widget::config::StoreConfig;
use dukkan_widget::manage::{self, NewProduct};
use dukkan_widget::search;

/// List every product in the catalog.
///
/// # Errors
///
/// Returns an error if configuration or the catalog fails to load.
pub fn list() -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    let catalog = Catalog::load(&config.catalog_path)?;

    tracing::info!(products = catalog.len(), "Catalog loaded");
    print_products(catalog.products().iter(), &config.currency_suffix);

    Ok(())
}

/// Filter the catalog with a free-text query and print the matches.
///
/// # Errors
///
/// Returns an error if configuration or the catalog fails to load.
pub fn search(query: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    let catalog = Catalog::load(&config.catalog_path)?;

    let results = search::filter(query, &catalog);
    tracing::info!(
        query = results.query(),
        matches = results.len(),
        "Search complete"
    );

    if results.is_filtered() && results.is_empty() {
        print_line(dukkan_widget::view::NO_RESULTS_MESSAGE);
        return Ok(());
    }

    print_products(results.products().iter().copied(), &config.currency_suffix);
    Ok(())
}

/// Add a product to the catalog document and persist it.
///
/// # Errors
///
/// Returns an error if configuration fails to load, a price flag is not a
/// valid decimal, or the catalog edit is rejected.
pub fn add(
    name: &str,
    price: &str,
    old_price: Option<&str>,
    description: Option<String>,
    images: Vec<String>,
    category: Option<i32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;

    let new = NewProduct {
        name: name.to_string(),
        price: parse_price(price)?,
        old_price: old_price.map(parse_price).transpose()?,
        description,
        images,
        category_id: category.map(CategoryId::new),
    };
    let product = manage::add_product(&config.catalog_path, new)?;

    print_line(&format!("Added product {}: {}", product.id, product.name));
    Ok(())
}

/// Remove a product from the catalog document and persist it.
///
/// # Errors
///
/// Returns an error if configuration fails to load, the id is unknown, or
/// the catalog edit is rejected.
pub fn remove(id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;

    let removed = manage::remove_product(&config.catalog_path, ProductId::new(id))?;

    print_line(&format!("Removed product {}: {}", removed.id, removed.name));
    Ok(())
}

fn parse_price(raw: &str) -> Result<Price, Box<dyn std::error::Error>> {
    let amount = raw
        .parse::<Decimal>()
        .map_err(|e| format!("invalid price {raw:?}: {e}"))?;
    Ok(Price::new(amount))
}

fn print_products<'a>(products: impl Iterator<Item = &'a Product>, suffix: &str) {
    for product in products {
        let old_price = product
            .old_price
            .map(|p| format!(" (was {} {suffix})", p.display_short()))
            .unwrap_or_default();
        print_line(&format!(
            "{:>4}  {}  {} {suffix}{old_price}",
            product.id,
            product.name,
            product.price.display_short(),
        ));
    }
}

#[allow(clippy::print_stdout)]
fn print_line(line: &str) {
    println!("{line}");
}
