use tracing_subscriber::{filter::ParseError, prelude::*, EnvFilter};

/// Builds the log filter from `RUST_LOG`-style directives. Nothing is logged
/// when no directives are given.
pub fn log_filter(directives: Option<&str>) -> Result<EnvFilter, ParseError> {
    match directives {
        Some(directives) => EnvFilter::try_new(directives),
        None => Ok(EnvFilter::new("off")),
    }
}

/// Installs the stderr subscriber. Bad `RUST_LOG` directives fall back to
/// warnings only; they never stop the list from being printed.
pub fn init() {
    let directives = std::env::var("RUST_LOG").ok();

    let (filter, invalid) = match log_filter(directives.as_deref()) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new("warn"), Some(err)),
    };

    // stdout carries the generated list, so logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(err) = invalid {
        warn!("ignoring invalid RUST_LOG {:?}: {}", directives.unwrap_or_default(), err);
    }
}
