//! Calculator JSON API — the reducer, the arithmetic helper and sessions.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calc::{self, CalculatorState, Operand};
use crate::error::error_response;
use crate::services::session::{self, SessionError, SessionView};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CalculateRequest {
    /// Omitted means a freshly mounted calculator.
    #[serde(default)]
    pub state: CalculatorState,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub state: CalculatorState,
    pub display: String,
}

#[derive(Deserialize)]
pub struct OperateRequest {
    pub a: Operand,
    pub b: Operand,
    pub operation: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OperateResponse {
    pub result: String,
}

#[derive(Deserialize)]
pub struct PressRequest {
    pub token: String,
}

/// `POST /api/calculate` — apply one token to a caller-held state.
pub async fn calculate(Json(body): Json<CalculateRequest>) -> Json<CalculateResponse> {
    let state = calc::calculate(&body.state, &body.token);
    let display = state.display();
    Json(CalculateResponse { state, display })
}

/// `POST /api/operate` — evaluate `a <operation> b`.
pub async fn operate(Json(body): Json<OperateRequest>) -> Result<Json<OperateResponse>, Response> {
    calc::operate(body.a, body.b, &body.operation)
        .map(|result| Json(OperateResponse { result }))
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, &e))
}

/// `POST /api/calculator/sessions` — mount a new calculator.
pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionView>) {
    (StatusCode::CREATED, Json(session::create_session(&state).await))
}

/// `GET /api/calculator/sessions/:id`
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, Response> {
    session::get_session(&state, id)
        .await
        .map(Json)
        .map_err(session_error_response)
}

/// `POST /api/calculator/sessions/:id/press`
pub async fn press_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PressRequest>,
) -> Result<Json<SessionView>, Response> {
    session::press(&state, id, &body.token)
        .await
        .map(Json)
        .map_err(session_error_response)
}

/// `DELETE /api/calculator/sessions/:id` — unmount a calculator.
pub async fn delete_session(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match session::remove_session(&state, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => session_error_response(e),
    }
}

pub(crate) fn session_error_to_status(err: &SessionError) -> StatusCode {
    match err {
        SessionError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

fn session_error_response(err: SessionError) -> Response {
    error_response(session_error_to_status(&err), &err)
}

#[cfg(test)]
#[path = "calculator_test.rs"]
mod tests;
