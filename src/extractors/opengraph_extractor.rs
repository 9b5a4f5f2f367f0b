//! OpenGraph-backed fields
//!
//! Title, description and image come from `og:*` meta tags, which storefront
//! themes emit regardless of how they expose pricing.

use crate::document::ParsedDocument;

use super::{non_empty, NOT_AVAILABLE};

/// `og:title`, then `<title>`, then the "N/A" placeholder
pub fn extract_title(document: &ParsedDocument) -> String {
    document
        .find_meta("og:title")
        .and_then(|meta| meta.content())
        .and_then(non_empty)
        .or_else(|| {
            document
                .find_title_element()
                .as_deref()
                .and_then(non_empty)
        })
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// `og:description`, or the "N/A" placeholder when the tag is missing
pub fn extract_description(document: &ParsedDocument) -> String {
    document
        .find_meta("og:description")
        .and_then(|meta| meta.content())
        .map(|content| content.trim().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// `og:image`; `None` means no image tag, `Some("")` means an empty one
pub fn extract_image_url(document: &ParsedDocument) -> Option<String> {
    document
        .find_meta("og:image")
        .and_then(|meta| meta.content())
        .map(|content| content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> ParsedDocument {
        ParsedDocument::parse(html)
    }

    #[test]
    fn test_title_prefers_opengraph() {
        let d = doc(r#"
            <head>
                <title>Store | Wool Scarf</title>
                <meta property="og:title" content="  Wool Scarf  ">
            </head>
        "#);
        assert_eq!(extract_title(&d), "Wool Scarf");
    }

    #[test]
    fn test_title_falls_back_to_title_element() {
        let d = doc("<head><title>\n  Wool Scarf – Store\n</title></head>");
        assert_eq!(extract_title(&d), "Wool Scarf – Store");
    }

    #[test]
    fn test_empty_og_title_falls_back() {
        let d = doc(r#"<head><meta property="og:title" content="   "><title>Scarf</title></head>"#);
        assert_eq!(extract_title(&d), "Scarf");
    }

    #[test]
    fn test_title_sentinel() {
        let d = doc("<html><head></head><body><h1>Heading only</h1></body></html>");
        assert_eq!(extract_title(&d), NOT_AVAILABLE);

        let d = doc("<html><head><title>   </title></head></html>");
        assert_eq!(extract_title(&d), NOT_AVAILABLE);
    }

    #[test]
    fn test_description() {
        let d = doc(r#"<meta property="og:description" content=" Soft merino wool. ">"#);
        assert_eq!(extract_description(&d), "Soft merino wool.");

        let d = doc(r#"<meta name="description" content="Not OpenGraph">"#);
        assert_eq!(extract_description(&d), NOT_AVAILABLE);
    }

    #[test]
    fn test_image_absent_vs_empty() {
        let d = doc(r#"<meta property="og:image" content=" https://cdn.example.com/a.png ">"#);
        assert_eq!(
            extract_image_url(&d).as_deref(),
            Some("https://cdn.example.com/a.png")
        );

        let d = doc(r#"<meta property="og:image" content="">"#);
        assert_eq!(extract_image_url(&d).as_deref(), Some(""));

        let d = doc("<head></head>");
        assert!(extract_image_url(&d).is_none());
    }
}
