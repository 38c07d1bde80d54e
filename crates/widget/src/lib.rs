//! Dukkan storefront widget library.
//!
//! The widget core for a small client-side storefront: an immutable product
//! catalog, an in-memory cart, free-text search, an image-gallery view-model,
//! and a checkout composer that hands the order off as a WhatsApp deep-link.
//!
//! There is no server, and the storefront itself never writes: session
//! state lives in a [`session::StorefrontSession`], mutates synchronously on
//! typed UI events, and every change re-derives a complete
//! [`view::StorefrontView`] for the rendering layer to consume. The only
//! disk writes are the owner-side catalog edits in [`manage`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod gallery;
pub mod manage;
pub mod search;
pub mod session;
pub mod view;
