//! Runtime configuration loaded from the environment.
//!
//! `.env` is read first (if present), then individual `PROMPTFORGE_*`
//! variables override the defaults.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;
use crate::synthesis::WritingStyle;

pub const ENV_DEFAULT_STYLE: &str = "PROMPTFORGE_DEFAULT_STYLE";
pub const ENV_LATENCY_MS: &str = "PROMPTFORGE_LATENCY_MS";
pub const ENV_MAX_PROMPT_CHARS: &str = "PROMPTFORGE_MAX_PROMPT_CHARS";
pub const ENV_LOG_FORMAT: &str = "PROMPTFORGE_LOG_FORMAT";

/// Hard ceiling shared with request validation
pub const MAX_PROMPT_CHARS: usize = 2000;

/// Log output format
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    /// Bunyan-style JSON lines
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Style used when a request does not name one
    pub default_style: WritingStyle,
    /// Artificial delay before generating, mimicking a remote call
    pub simulated_latency: Duration,
    /// Longest accepted prompt, in characters
    pub max_prompt_chars: usize,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_style: WritingStyle::Creative,
            simulated_latency: Duration::ZERO,
            max_prompt_chars: MAX_PROMPT_CHARS,
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Load `.env` (ignored when missing) and read the environment
    pub fn load() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Read configuration from environment variables only
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let default_style = read_var(ENV_DEFAULT_STYLE)?.unwrap_or(defaults.default_style);
        let simulated_latency = read_var::<u64>(ENV_LATENCY_MS)?
            .map(Duration::from_millis)
            .unwrap_or(defaults.simulated_latency);
        let max_prompt_chars = read_var(ENV_MAX_PROMPT_CHARS)?.unwrap_or(defaults.max_prompt_chars);
        let log_format = read_var(ENV_LOG_FORMAT)?.unwrap_or(defaults.log_format);

        if max_prompt_chars == 0 || max_prompt_chars > MAX_PROMPT_CHARS {
            return Err(AppError::Config(format!(
                "{} must be between 1 and {}, got {}",
                ENV_MAX_PROMPT_CHARS, MAX_PROMPT_CHARS, max_prompt_chars
            )));
        }

        Ok(Self {
            default_style,
            simulated_latency,
            max_prompt_chars,
            log_format,
        })
    }
}

/// Parse an optional environment variable; blank counts as unset
fn read_var<T>(name: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{}: {}", name, e))),
        Err(_) => Ok(None),
    }
}
