//! Calculator sessions — create, read, press, remove.
//!
//! Each press takes the session map's write lock, runs the reducer against
//! the held state and stores the result, so one session never sees two
//! presses interleave.

use std::time::Instant;

use serde::Serialize;
use uuid::Uuid;

use crate::calc::{CalculatorState, calculate};
use crate::state::{AppState, CalculatorSession};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("calculator session not found: {0}")]
    NotFound(Uuid),
}

impl crate::error::ErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_SESSION_NOT_FOUND",
        }
    }
}

/// Snapshot of a session as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub state: CalculatorState,
    pub display: String,
}

impl SessionView {
    fn new(id: Uuid, state: &CalculatorState) -> Self {
        Self { id, state: state.clone(), display: state.display() }
    }
}

/// Start a fresh session with an all-empty calculator.
///
/// At the configured cap the least recently used session is evicted first.
pub async fn create_session(state: &AppState) -> SessionView {
    let id = Uuid::new_v4();
    let session = CalculatorSession::new(Instant::now());
    let view = SessionView::new(id, &session.state);

    let mut sessions = state.sessions.write().await;
    while sessions.len() >= state.session_config.max_sessions {
        let Some(oldest) = sessions.iter().min_by_key(|(_, s)| s.last_used).map(|(key, _)| *key) else {
            break;
        };
        sessions.remove(&oldest);
        tracing::debug!(id = %oldest, "calculator session evicted");
    }
    sessions.insert(id, session);
    drop(sessions);

    tracing::debug!(%id, "calculator session created");
    view
}

/// Read a session and mark it as used.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] if the session does not exist or expired.
pub async fn get_session(state: &AppState, id: Uuid) -> Result<SessionView, SessionError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
    session.last_used = Instant::now();
    Ok(SessionView::new(id, &session.state))
}

/// Apply one keypad token to a session.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] if the session does not exist or expired.
pub async fn press(state: &AppState, id: Uuid, token: &str) -> Result<SessionView, SessionError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
    session.state = calculate(&session.state, token);
    session.last_used = Instant::now();
    tracing::debug!(%id, token, display = %session.state.display(), "calculator press");
    Ok(SessionView::new(id, &session.state))
}

/// Drop a session.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] if the session does not exist.
pub async fn remove_session(state: &AppState, id: Uuid) -> Result<(), SessionError> {
    state
        .sessions
        .write()
        .await
        .remove(&id)
        .map(|_| ())
        .ok_or(SessionError::NotFound(id))
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
