//! Blocking page fetch
//!
//! Hands markup to the extraction engine, or turns a failed request into a
//! degraded record so callers always get a `ProductRecord` back.

use log::{info, warn};
use url::Url;

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::extractors::{extract_product, ProductRecord};

/// Fetch `url` and extract its product record. Never fails.
pub fn scrape_product(url: &str, config: &FetchConfig) -> ProductRecord {
    match fetch_page(url, config) {
        Ok(html) => extract_product(&html),
        Err(e) => {
            warn!("Failed to fetch {}: {}", url, e);
            ProductRecord::fetch_failed(url, &e)
        }
    }
}

/// GET `url` and return its body as text.
///
/// Non-2xx responses are errors. Timeouts and transport errors are retried up
/// to `config.max_retries` times.
pub fn fetch_page(url: &str, config: &FetchConfig) -> Result<String, FetchError> {
    let parsed = validate_url(url)?;
    let agent = build_agent(config);

    let mut attempt = 0;
    loop {
        match fetch_once(&agent, parsed.as_str(), config.max_body_bytes) {
            Ok(body) => {
                info!("Fetched {} ({} bytes)", parsed, body.len());
                return Ok(body);
            }
            Err(e) if e.is_retryable() && attempt < config.max_retries => {
                attempt += 1;
                warn!(
                    "Attempt {} for {} failed: {}; retrying",
                    attempt, parsed, e
                );
            }
            Err(e) => return Err(e),
        }
    }
}

/// Only absolute http(s) URLs are fetched
pub fn validate_url(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url.trim())?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::UnsupportedScheme(other.to_string())),
    }
}

fn build_agent(config: &FetchConfig) -> ureq::Agent {
    ureq::Agent::config_builder()
        .timeout_global(Some(config.timeout))
        .user_agent(config.user_agent.as_str())
        .build()
        .into()
}

fn fetch_once(agent: &ureq::Agent, url: &str, max_body_bytes: u64) -> Result<String, FetchError> {
    let response = agent.get(url).call()?;

    let mut body = response.into_body();
    body.with_config()
        .limit(max_body_bytes)
        .read_to_string()
        .map_err(|e| FetchError::Body(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::NOT_AVAILABLE;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://shop.example.com/products/mug").is_ok());
        assert!(validate_url(" http://shop.example.com/products/mug ").is_ok());
        assert!(matches!(
            validate_url("not a url"),
            Err(FetchError::InvalidUrl(_))
        ));
        assert!(matches!(
            validate_url("ftp://shop.example.com/mug"),
            Err(FetchError::UnsupportedScheme(s)) if s == "ftp"
        ));
    }

    #[test]
    fn test_fetch_page_rejects_bad_input_without_network() {
        let config = FetchConfig::default();
        assert!(matches!(
            fetch_page("file:///etc/passwd", &config),
            Err(FetchError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_scrape_product_degrades_on_fetch_failure() {
        let record = scrape_product("/products/relative-only", &FetchConfig::default());

        assert_eq!(record.title, NOT_AVAILABLE);
        assert!(record.description.starts_with("Failed to fetch page /products/relative-only"));
        assert!(record.description.contains("invalid URL"));
        assert!(record.price.is_none());
        assert!(record.image_url.is_none());
    }
}
