//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout only carries generated output. The filter is
//! taken from `RUST_LOG`, defaulting to `info`.

use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::config::LogFormat;
use crate::error::AppError;

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(app_name: &str, format: LogFormat) -> Result<(), AppError> {
    let result = match format {
        LogFormat::Pretty => {
            let subscriber = Registry::default()
                .with(env_filter())
                .with(fmt::layer().with_writer(std::io::stderr).with_target(false));
            set_global_default(subscriber)
        }
        LogFormat::Json => {
            let subscriber = Registry::default()
                .with(env_filter())
                .with(JsonStorageLayer)
                .with(BunyanFormattingLayer::new(app_name.to_string(), std::io::stderr));
            set_global_default(subscriber)
        }
    };

    result.map_err(|e| AppError::Config(format!("Failed to install tracing subscriber: {}", e)))
}
