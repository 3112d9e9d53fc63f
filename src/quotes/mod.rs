//! Quote feed — remote collection of `{ id, quote, author }` records.
//!
//! DESIGN
//! ======
//! Handlers depend on the `QuoteSource` trait rather than the concrete
//! reqwest client so tests can swap in a canned feed. One fetch per page or
//! API load: no cache, no retry.

pub mod client;

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

pub use client::QuoteClient;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("quote request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success status.
    #[error("quote endpoint returned status {status}")]
    Response { status: u16, body: String },

    /// The body was not a JSON array of quotes.
    #[error("quote response parse failed: {0}")]
    Parse(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl crate::error::ErrorCode for QuoteError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Request(_) => "E_QUOTE_REQUEST",
            Self::Response { .. } => "E_QUOTE_RESPONSE",
            Self::Parse(_) => "E_QUOTE_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Response { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// QUOTE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Some providers omit the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub quote: String,
    pub author: String,
}

// =============================================================================
// SOURCE
// =============================================================================

#[async_trait::async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the full quote collection.
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, QuoteError>;
}

/// Pick one quote uniformly at random, or `None` for an empty feed.
#[must_use]
pub fn pick_random(quotes: &[Quote]) -> Option<&Quote> {
    quotes.choose(&mut rand::rng())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
