//! Logger initialization

use std::io::Write;

use log::LevelFilter;

use crate::error::InitializationError;

/// Initialize `env_logger` at `level`.
///
/// `RUST_LOG` is read first; `level` then overrides it for this crate so
/// `--log-level` on the command line wins. The HTML parser's own crates are
/// kept quiet since malformed storefront markup makes them noisy.
pub fn init_logger(level: LevelFilter) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("ureq", LevelFilter::Warn);
    builder.filter_module("product_parser", level);

    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{} {}] {}",
            record.level(),
            record.target(),
            record.args()
        )
    });

    // try_init so tests and embedders that already installed a logger don't panic
    builder.try_init()?;

    Ok(())
}
