//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the HTML pages (`/`, `/calculator`, `/quote`), the
//! JSON API under `/api`, and static assets under `/static`. The API gets a
//! permissive CORS layer; everything is traced and gzip-compressed.

pub mod calculator;
pub mod pages;
pub mod quotes;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes.
fn api_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/calculate", post(calculator::calculate))
        .route("/api/operate", post(calculator::operate))
        .route("/api/calculator/sessions", post(calculator::create_session))
        .route(
            "/api/calculator/sessions/{id}",
            get(calculator::get_session).delete(calculator::delete_session),
        )
        .route("/api/calculator/sessions/{id}/press", post(calculator::press_session))
        .route("/api/quotes", get(quotes::list_quotes))
        .route("/api/quotes/random", get(quotes::random_quote))
        .layer(cors)
}

/// HTML page routes.
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/calculator", get(pages::new_calculator))
        .route("/calculator/{id}", get(pages::show_calculator).post(pages::press_calculator))
        .route("/quote", get(pages::quote_page))
}

/// Full application router.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .merge(page_routes())
        .merge(api_routes())
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(pages::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
