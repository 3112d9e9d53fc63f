//! HTML page handlers.

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use uuid::Uuid;

use crate::services::session;
use crate::state::AppState;
use crate::views;
use crate::views::quotes::QuotePanel;

#[derive(Deserialize)]
pub struct PressForm {
    #[serde(default)]
    pub token: String,
}

/// `GET /` — welcome page.
pub async fn home() -> Html<String> {
    Html(views::home::render())
}

/// `GET /calculator` — mount a fresh calculator and send the browser to it.
pub async fn new_calculator(State(state): State<AppState>) -> Redirect {
    let view = session::create_session(&state).await;
    Redirect::to(&format!("/calculator/{}", view.id))
}

/// `GET /calculator/:id` — render a calculator session.
pub async fn show_calculator(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match session::get_session(&state, id).await {
        Ok(view) => Html(views::calculator::render(view.id, &view.state)).into_response(),
        // Expired or unknown: start over rather than show an error.
        Err(_) => Redirect::to("/calculator").into_response(),
    }
}

/// `POST /calculator/:id` — press one button, then redirect back.
pub async fn press_calculator(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<PressForm>,
) -> Redirect {
    match session::press(&state, id, &form.token).await {
        Ok(view) => Redirect::to(&format!("/calculator/{}", view.id)),
        Err(_) => Redirect::to("/calculator"),
    }
}

/// `GET /quote` — fetch the feed once and render it.
pub async fn quote_page(State(state): State<AppState>) -> Html<String> {
    let panel = match state.quotes.fetch_quotes().await {
        Ok(quotes) => QuotePanel::from(quotes),
        Err(e) => {
            tracing::warn!(error = %e, "quote fetch failed");
            QuotePanel::Failed
        }
    };
    Html(views::quotes::render(panel))
}

/// Any unmatched path.
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(views::not_found::render()))
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
