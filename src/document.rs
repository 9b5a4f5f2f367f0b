//! Parsed page document
//!
//! Thin read-only view over `scraper::Html` exposing only the lookups the
//! field extractors need. html5ever recovers from malformed markup, so parsing
//! itself never fails; a missing element is reported as `None` or an empty list.

use scraper::node::Element;
use scraper::{Html, Selector};

/// Content type of schema.org JSON-LD blocks
pub const LD_JSON: &str = "application/ld+json";
/// Content type of theme-embedded product JSON blocks
pub const APPLICATION_JSON: &str = "application/json";

/// Queryable tree over one page's markup
pub struct ParsedDocument {
    html: Html,
}

/// Attributes of a matched `<meta>` element
#[derive(Debug, Clone, Copy)]
pub struct MetaTag<'a> {
    element: &'a Element,
}

impl<'a> MetaTag<'a> {
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.attr(name)
    }

    /// Raw `content` attribute, untrimmed
    pub fn content(&self) -> Option<&'a str> {
        self.attr("content")
    }
}

impl ParsedDocument {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// First `<meta>` in document order whose `property` attribute equals `property`
    pub fn find_meta(&self, property: &str) -> Option<MetaTag<'_>> {
        let selector = Selector::parse("meta").ok()?;

        self.html
            .select(&selector)
            .find(|el| el.value().attr("property") == Some(property))
            .map(|el| MetaTag {
                element: el.value(),
            })
    }

    /// Text of the first `<title>` element, untrimmed
    pub fn find_title_element(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;

        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    /// Bodies of all `<script>` blocks declaring `content_type`, in document order.
    ///
    /// Themes are inconsistent about casing and padding of the `type`
    /// attribute, so the comparison ignores both.
    pub fn find_all_scripts(&self, content_type: &str) -> Vec<String> {
        let selector = match Selector::parse("script[type]") {
            Ok(s) => s,
            Err(_) => return vec![],
        };

        self.html
            .select(&selector)
            .filter(|el| {
                el.value()
                    .attr("type")
                    .is_some_and(|t| t.trim().eq_ignore_ascii_case(content_type))
            })
            .map(|el| el.text().collect::<String>())
            .collect()
    }
}
