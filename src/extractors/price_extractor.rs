//! Price resolution
//!
//! Sources are tried from most to least explicit, stopping at the first hit:
//! 1. `<meta property="product:price:amount">`
//! 2. JSON-LD `Product.offers.price`
//! 3. first entry of an embedded `variants` array
//!
//! No source means no price; that is a normal result for unpriced listings.

use log::debug;

use crate::document::ParsedDocument;

use super::{extract_jsonld_price, extract_variant_price, non_empty};

pub const PRICE_META_PROPERTY: &str = "product:price:amount";

pub fn extract_price(document: &ParsedDocument) -> Option<String> {
    let price = extract_meta_price(document)
        .or_else(|| extract_jsonld_price(document))
        .or_else(|| extract_variant_price(document));

    if price.is_none() {
        debug!("No price signal found");
    }
    price
}

/// Trimmed `product:price:amount` content, if non-empty
pub fn extract_meta_price(document: &ParsedDocument) -> Option<String> {
    document
        .find_meta(PRICE_META_PROPERTY)
        .and_then(|meta| meta.content())
        .and_then(non_empty)
}
