//! Application configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_QUOTES_URL: &str = "https://api.api-ninjas.com/v1/quotes";
pub const DEFAULT_QUOTES_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_QUOTES_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 1800;
pub const DEFAULT_SESSION_SWEEP_SECS: u64 = 60;
pub const DEFAULT_SESSION_MAX: usize = 10_000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotesConfig {
    pub url: String,
    pub api_key: Option<String>,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Sessions untouched for this long are dropped by the sweeper.
    pub idle_ttl: Duration,
    pub sweep_interval: Duration,
    /// Live session cap. Creating one more evicts the least recently used.
    pub max_sessions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_ttl: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
            sweep_interval: Duration::from_secs(DEFAULT_SESSION_SWEEP_SECS),
            max_sessions: DEFAULT_SESSION_MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub quotes: QuotesConfig,
    pub sessions: SessionConfig,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STATIC_DIR`: default `<crate>/static`
    /// - `QUOTES_URL`: quotes endpoint returning a JSON array
    /// - `QUOTES_API_KEY`: sent as `X-Api-Key` when set
    /// - `QUOTES_REQUEST_TIMEOUT_SECS`: default 10
    /// - `QUOTES_CONNECT_TIMEOUT_SECS`: default 5
    /// - `SESSION_IDLE_SECS`: default 1800
    /// - `SESSION_SWEEP_SECS`: default 60
    /// - `SESSION_MAX`: default 10000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a numeric variable does not parse,
    /// or if `SESSION_SWEEP_SECS` or `SESSION_MAX` is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a numeric variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"));

        let quotes = QuotesConfig {
            url: lookup("QUOTES_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_QUOTES_URL.to_string()),
            api_key: lookup("QUOTES_API_KEY").filter(|v| !v.trim().is_empty()),
            request_timeout: secs(&lookup, "QUOTES_REQUEST_TIMEOUT_SECS", DEFAULT_QUOTES_REQUEST_TIMEOUT_SECS)?,
            connect_timeout: secs(&lookup, "QUOTES_CONNECT_TIMEOUT_SECS", DEFAULT_QUOTES_CONNECT_TIMEOUT_SECS)?,
        };

        let sessions = SessionConfig {
            idle_ttl: secs(&lookup, "SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS)?,
            sweep_interval: secs(&lookup, "SESSION_SWEEP_SECS", DEFAULT_SESSION_SWEEP_SECS)?,
            max_sessions: parse_or(&lookup, "SESSION_MAX", DEFAULT_SESSION_MAX)?,
        };
        // tokio::time::interval panics on a zero period.
        if sessions.sweep_interval.is_zero() {
            return Err(ConfigError::Invalid { var: "SESSION_SWEEP_SECS".into(), value: "0".into() });
        }
        if sessions.max_sessions == 0 {
            return Err(ConfigError::Invalid { var: "SESSION_MAX".into(), value: "0".into() });
        }

        Ok(Self { port, static_dir, quotes, sessions })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var: key.to_string(), value: raw }),
    }
}

fn secs(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> Result<Duration, ConfigError> {
    parse_or(lookup, key, default).map(Duration::from_secs)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
