//! Dukkan Core - Shared types library.
//!
//! This crate provides common types used across all Dukkan components:
//! - `widget` - The storefront widget core (catalog, cart, gallery, checkout)
//! - `cli` - Command-line driver for the widget
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no rendering, no network
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
