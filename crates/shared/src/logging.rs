use std::env;

use tracing::warn;
use tracing_subscriber::EnvFilter;

pub fn configure_logging() -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_new(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stdout);

    let initialized = if env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = initialized {
        warn!("logging already initialized: {e}");
    }

    Ok(())
}
