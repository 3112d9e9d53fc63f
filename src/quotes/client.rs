//! reqwest-backed quote feed.

use super::{Quote, QuoteError, QuoteSource};
use crate::config::QuotesConfig;

pub struct QuoteClient {
    http: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl QuoteClient {
    /// Build a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::HttpClientBuild`] if the HTTP client cannot be constructed.
    pub fn new(config: &QuotesConfig) -> Result<Self, QuoteError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| QuoteError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url: config.url.clone(), api_key: config.api_key.clone() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn get_text(&self) -> Result<String, QuoteError> {
        let mut request = self.http.get(&self.url);
        if let Some(key) = &self.api_key {
            request = request.header("X-Api-Key", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| QuoteError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| QuoteError::Request(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(QuoteError::Response { status, body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl QuoteSource for QuoteClient {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, QuoteError> {
        let text = self.get_text().await?;
        let quotes = parse_quotes(&text)?;
        tracing::debug!(count = quotes.len(), "quotes fetched");
        Ok(quotes)
    }
}

pub(crate) fn parse_quotes(text: &str) -> Result<Vec<Quote>, QuoteError> {
    serde_json::from_str(text).map_err(|e| QuoteError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
