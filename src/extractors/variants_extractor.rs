//! Theme-embedded product JSON
//!
//! Many storefront themes embed the full product object in a
//! `<script type="application/json">` block, with pricing only on its
//! `variants`. The first variant is used as listed, not the cheapest one.

use log::debug;
use serde_json::Value;

use crate::document::{ParsedDocument, APPLICATION_JSON};

use super::{parsed_scripts, price_text};

/// Price of the first variant of the first product JSON block that has one
pub fn extract_variant_price(document: &ParsedDocument) -> Option<String> {
    let price = parsed_scripts(document, APPLICATION_JSON).find_map(|json| first_variant_price(&json));
    if let Some(ref p) = price {
        debug!("Price {} found in embedded variants", p);
    }
    price
}

/// `variants[0].price` of a parsed product object
pub fn first_variant_price(value: &Value) -> Option<String> {
    match value {
        Value::Object(obj) => match obj.get("variants") {
            Some(Value::Array(variants)) => variants.first()?.get("price").and_then(price_text),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_variant_not_minimum() {
        let value = json!({"variants": [{"price": "2600"}, {"price": "1000"}]});
        assert_eq!(first_variant_price(&value).as_deref(), Some("2600"));
    }

    #[test]
    fn test_variant_price_is_verbatim() {
        let value = json!({"id": 123, "variants": [{"id": 1, "price": " 26.00 "}]});
        assert_eq!(first_variant_price(&value).as_deref(), Some("26.00"));

        let value = json!({"variants": [{"price": 2600}]});
        assert_eq!(first_variant_price(&value).as_deref(), Some("2600"));
    }

    #[test]
    fn test_first_variant_without_price_is_not_skipped_over() {
        let value = json!({"variants": [{"title": "Default"}, {"price": "10"}]});
        assert!(first_variant_price(&value).is_none());
    }

    #[test]
    fn test_non_matching_shapes() {
        assert!(first_variant_price(&json!({"variants": []})).is_none());
        assert!(first_variant_price(&json!({"variants": {"price": "1"}})).is_none());
        assert!(first_variant_price(&json!({"variants": [{"price": ""}]})).is_none());
        assert!(first_variant_price(&json!({"variants": ["1"]})).is_none());
        assert!(first_variant_price(&json!([{"variants": [{"price": "1"}]}])).is_none());
    }

    #[test]
    fn test_extract_variant_price_scans_blocks_in_order() {
        let html = r#"
        <body>
            <script type="application/json" id="cart-settings">{"currency": "USD"}</script>
            <script type="application/json">not json</script>
            <script type="application/json" data-product-json>
            {
                "id": 123456789,
                "title": "Cool Widget",
                "variants": [{"id": 1, "price": "2600"}, {"id": 2, "price": "1000"}]
            }
            </script>
            <script type="application/json">{"variants": [{"price": "1"}]}</script>
        </body>
        "#;

        let doc = ParsedDocument::parse(html);
        assert_eq!(extract_variant_price(&doc).as_deref(), Some("2600"));
    }
}
