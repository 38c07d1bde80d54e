//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `DUKKAN_STORE_NAME` - Store name embedded in the order message header
//! - `DUKKAN_WHATSAPP_RECIPIENT` - Owner phone number for the checkout
//!   deep-link (country code + number, digits only, e.g. `201000000000`)
//!
//! ## Optional
//! - `DUKKAN_CURRENCY_SUFFIX` - Currency suffix for displayed amounts
//!   (default: `ج.م`)
//! - `DUKKAN_CATALOG_PATH` - Path to the catalog JSON document
//!   (default: `data/products.json`)

use std::path::PathBuf;

use thiserror::Error;

/// Recipient numbers are country code + subscriber number.
const MIN_RECIPIENT_DIGITS: usize = 8;
const MAX_RECIPIENT_DIGITS: usize = 15;

const DEFAULT_CURRENCY_SUFFIX: &str = "ج.م";
const DEFAULT_CATALOG_PATH: &str = "data/products.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront widget configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store name shown in the order message header.
    pub store_name: String,
    /// WhatsApp recipient for composed orders. Fixed configuration, never
    /// derived from user input.
    pub whatsapp_recipient: String,
    /// Suffix appended to displayed amounts (e.g. `ج.م`).
    pub currency_suffix: String,
    /// Path to the catalog JSON document.
    pub catalog_path: PathBuf,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or the
    /// recipient fails phone-number validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let store_name = get_required_env("DUKKAN_STORE_NAME")?;
        let whatsapp_recipient = get_required_env("DUKKAN_WHATSAPP_RECIPIENT")?;
        validate_recipient(&whatsapp_recipient, "DUKKAN_WHATSAPP_RECIPIENT")?;

        Ok(Self {
            store_name,
            whatsapp_recipient,
            currency_suffix: get_env_or_default("DUKKAN_CURRENCY_SUFFIX", DEFAULT_CURRENCY_SUFFIX),
            catalog_path: PathBuf::from(get_env_or_default(
                "DUKKAN_CATALOG_PATH",
                DEFAULT_CATALOG_PATH,
            )),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a recipient looks like an international phone number:
/// digits only, within length bounds.
fn validate_recipient(value: &str, var_name: &str) -> Result<(), ConfigError> {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must contain digits only (country code + number, no '+')".to_string(),
        ));
    }
    if value.len() < MIN_RECIPIENT_DIGITS || value.len() > MAX_RECIPIENT_DIGITS {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!(
                "must be {MIN_RECIPIENT_DIGITS}-{MAX_RECIPIENT_DIGITS} digits (got {})",
                value.len()
            ),
        ));
    }
    Ok(())
}
