//! Command-line entry point.
//!
//! Fetches a product page (or reads a saved one) and prints the extracted
//! record as JSON. Fetch failures still print a record, describing the failure.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use product_parser::logging::init_logger;
use product_parser::{extract_product, scrape_product, FetchConfig, ProductRecord};

#[derive(Debug, Parser)]
#[command(name = "product_parser", about = "Extract product details from a storefront page")]
struct Cli {
    /// Product page URL
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    url: Option<String>,

    /// Read HTML from a local file instead of fetching
    #[arg(long)]
    file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// User-Agent header sent with the request
    #[arg(long)]
    user_agent: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn fetch_config(&self) -> FetchConfig {
        let mut config = FetchConfig::from_env();
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(ref ua) = self.user_agent {
            config.user_agent = ua.clone();
        }
        config
    }
}

fn run(cli: &Cli) -> Result<ProductRecord> {
    if let Some(ref path) = cli.file {
        let html = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return Ok(extract_product(&html));
    }

    let url = cli.url.as_deref().context("No URL given")?;
    Ok(scrape_product(url, &cli.fetch_config()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.log_level).context("Failed to initialize logger")?;

    let record = run(&cli)?;
    let json = if cli.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    println!("{}", json);

    Ok(())
}
