//! Quote feed JSON API.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::error_response;
use crate::quotes::{self, Quote, QuoteError};
use crate::state::AppState;

/// `GET /api/quotes` — proxy the configured quote feed.
pub async fn list_quotes(State(state): State<AppState>) -> Result<Json<Vec<Quote>>, Response> {
    state.quotes.fetch_quotes().await.map(Json).map_err(|e| {
        tracing::warn!(error = %e, "quote fetch failed");
        error_response(quote_error_to_status(&e), &e)
    })
}

/// `GET /api/quotes/random` — one quote from the feed.
pub async fn random_quote(State(state): State<AppState>) -> Result<Json<Quote>, Response> {
    let Json(all) = list_quotes(State(state)).await?;
    quotes::pick_random(&all)
        .cloned()
        .map(Json)
        .ok_or_else(|| StatusCode::NOT_FOUND.into_response())
}

pub(crate) fn quote_error_to_status(err: &QuoteError) -> StatusCode {
    match err {
        QuoteError::Request(_) | QuoteError::Response { .. } | QuoteError::Parse(_) => StatusCode::BAD_GATEWAY,
        QuoteError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "quotes_test.rs"]
mod tests;
