//! JSON-LD price extraction
//!
//! Reads schema.org `Product` data from `<script type="application/ld+json">`
//! blocks. Only two shapes are recognised: a top-level `Product` object, or a
//! top-level array whose elements are checked in order.

use log::debug;
use serde_json::{Map, Value};

use crate::document::{ParsedDocument, LD_JSON};

use super::{parsed_scripts, price_text};

/// Price of the first `Product` with an `offers.price`, scanning blocks in order
pub fn extract_jsonld_price(document: &ParsedDocument) -> Option<String> {
    let price = parsed_scripts(document, LD_JSON).find_map(|json| product_offer_price(&json));
    if let Some(ref p) = price {
        debug!("Price {} found in JSON-LD offers", p);
    }
    price
}

/// Apply the Product/offers rule to one parsed JSON-LD block
pub fn product_offer_price(value: &Value) -> Option<String> {
    match value {
        Value::Object(obj) => offer_price(obj),
        Value::Array(items) => items.iter().find_map(|item| match item {
            Value::Object(obj) => offer_price(obj),
            _ => None,
        }),
        _ => None,
    }
}

fn offer_price(obj: &Map<String, Value>) -> Option<String> {
    match (obj.get("@type"), obj.get("offers")) {
        (Some(Value::String(type_name)), Some(Value::Object(offers))) if type_name == "Product" => {
            offers.get("price").and_then(price_text)
        }
        _ => None,
    }
}
