//! Demo configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Only the demo binary reads this; the
//! library itself takes no configuration.

use std::str::FromStr;

use crate::error::ConfigError;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                key: "LOG_FORMAT",
                value: s.to_string(),
            }),
        }
    }
}

/// Top-level demo configuration.
///
/// Loaded once at startup via [`DemoConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of log subscribers to register.
    pub subscriber_count: usize,

    /// Messages to publish, in order.
    pub messages: Vec<String>,

    /// Whether to print the recorded deliveries as JSON lines.
    pub transcript: bool,

    /// Tracing output format.
    pub log_format: LogFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            subscriber_count: 2,
            messages: vec!["hello".to_string(), "world".to_string()],
            transcript: true,
            log_format: LogFormat::Text,
        }
    }
}

impl DemoConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to the [`Default`] values when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `LOG_FORMAT` is set to
    /// something other than `text` or `json`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// [`DemoConfig::from_env`] passes the process environment; tests pass
    /// a closure over a fixed table.
    ///
    /// # Errors
    ///
    /// Same as [`DemoConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let subscriber_count = parse_or(&lookup, "DEMO_SUBSCRIBERS", defaults.subscriber_count);

        let messages = lookup("DEMO_MESSAGES")
            .map(|raw| split_messages(&raw))
            .unwrap_or(defaults.messages);

        let transcript = parse_bool_or(&lookup, "DEMO_TRANSCRIPT", defaults.transcript);

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            subscriber_count,
            messages,
            transcript,
            log_format,
        })
    }
}

/// Splits a comma-separated list, trimming entries and skipping blanks.
fn split_messages(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Parses `key` as `T`, returning `default` on missing or invalid values.
fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Parses `key` as a boolean. Accepts `"true"`, `"1"`, `"false"`, `"0"`
/// (case-insensitive). Returns `default` otherwise.
fn parse_bool_or<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("true" | "1") => true,
        Some("false" | "0") => false,
        _ => default,
    }
}
