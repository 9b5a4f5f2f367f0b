//! Product field extractors
//!
//! Each field has its own ordered chain of signal sources and resolves
//! independently of the others:
//! - title, description, image: OpenGraph meta tags (plus `<title>` for title)
//! - price: product meta tag, then JSON-LD, then theme variant JSON

mod jsonld_extractor;
mod opengraph_extractor;
mod price_extractor;
mod variants_extractor;

pub use jsonld_extractor::*;
pub use opengraph_extractor::*;
pub use price_extractor::*;
pub use variants_extractor::*;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::ParsedDocument;
use crate::error::{ExtractError, FetchError};

/// Placeholder for title and description when the page carries neither
pub const NOT_AVAILABLE: &str = "N/A";

/// Normalized product record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: String,
    pub description: String,
    pub price: Option<String>,
    pub image_url: Option<String>,
}

impl ProductRecord {
    /// Degraded record for a page whose markup could not be obtained
    pub fn fetch_failed(url: &str, err: &FetchError) -> Self {
        Self {
            title: NOT_AVAILABLE.to_string(),
            description: format!("Failed to fetch page {}: {}", url, err),
            price: None,
            image_url: None,
        }
    }
}

/// Extract a product record from raw page markup
pub fn extract_product(html: &str) -> ProductRecord {
    let document = ParsedDocument::parse(html);
    extract_from_document(&document)
}

/// Run every field extractor against an already parsed document
pub fn extract_from_document(document: &ParsedDocument) -> ProductRecord {
    ProductRecord {
        title: extract_title(document),
        description: extract_description(document),
        price: extract_price(document),
        image_url: extract_image_url(document),
    }
}

/// Parse one embedded script body as JSON
pub(crate) fn parse_script_json(body: &str) -> Result<Value, ExtractError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::EmptyScript);
    }
    Ok(serde_json::from_str(trimmed)?)
}

/// Parse every script body of `content_type`, skipping the ones that fail
pub(crate) fn parsed_scripts<'a>(
    document: &'a ParsedDocument,
    content_type: &'a str,
) -> impl Iterator<Item = Value> + 'a {
    document
        .find_all_scripts(content_type)
        .into_iter()
        .enumerate()
        .filter_map(move |(index, body)| match parse_script_json(&body) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Skipping {} block #{}: {}", content_type, index, e);
                None
            }
        })
}

/// Render a JSON price as an opaque trimmed string.
///
/// Strings and numbers are accepted verbatim; anything else, or a string that
/// trims to empty, is not a price.
pub(crate) fn price_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Trimmed, non-empty text
pub(crate) fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
