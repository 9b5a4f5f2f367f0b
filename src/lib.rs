//! Storefront product page parser
//!
//! Extracts a normalized product record from product page HTML:
//! - title, description and image from OpenGraph meta tags
//! - price from product meta tags, JSON-LD offers, or theme variant JSON
//!
//! Also provides a blocking page fetcher and an FFI interface.

pub mod config;
pub mod document;
pub mod error;
pub mod extractors;
pub mod ffi;
pub mod fetch;
pub mod logging;

pub use config::FetchConfig;
pub use document::ParsedDocument;
pub use error::{ExtractError, FetchError, InitializationError};
pub use extractors::*;
pub use fetch::{fetch_page, scrape_product};
pub use ffi::*;
