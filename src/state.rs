//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the quote feed and a map of live calculator sessions. Each
//! session owns the state of one mounted calculator view; the sweep task
//! drops sessions that sit idle past the configured TTL.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::calc::CalculatorState;
use crate::config::SessionConfig;
use crate::quotes::QuoteSource;

// =============================================================================
// CALCULATOR SESSION
// =============================================================================

/// Server-held state for one calculator view.
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    pub state: CalculatorState,
    /// Last create, read or press. Drives idle expiry.
    pub last_used: Instant,
}

impl CalculatorSession {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self { state: CalculatorState::new(), last_used: now }
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<dyn QuoteSource>,
    pub sessions: Arc<RwLock<HashMap<Uuid, CalculatorSession>>>,
    pub session_config: SessionConfig,
}

impl AppState {
    #[must_use]
    pub fn new(quotes: Arc<dyn QuoteSource>, session_config: SessionConfig) -> Self {
        Self { quotes, sessions: Arc::new(RwLock::new(HashMap::new())), session_config }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use std::sync::Mutex;

    use crate::quotes::{Quote, QuoteError};

    /// Canned quote feed. Each fetch is counted.
    pub struct MockQuotes {
        result: Mutex<Result<Vec<Quote>, String>>,
        calls: Mutex<usize>,
    }

    impl MockQuotes {
        #[must_use]
        pub fn with_quotes(quotes: Vec<Quote>) -> Self {
            Self { result: Mutex::new(Ok(quotes)), calls: Mutex::new(0) }
        }

        #[must_use]
        pub fn failing(message: &str) -> Self {
            Self { result: Mutex::new(Err(message.to_owned())), calls: Mutex::new(0) }
        }

        #[must_use]
        pub fn call_count(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl QuoteSource for MockQuotes {
        async fn fetch_quotes(&self) -> Result<Vec<Quote>, QuoteError> {
            *self.calls.lock().unwrap() += 1;
            self.result
                .lock()
                .unwrap()
                .clone()
                .map_err(QuoteError::Request)
        }
    }

    #[must_use]
    pub fn sample_quote() -> Quote {
        Quote { id: Some(1), quote: "Cita de ejemplo".into(), author: "Autor de ejemplo".into() }
    }

    /// Create a test `AppState` backed by a one-quote feed.
    #[must_use]
    pub fn test_app_state() -> AppState {
        test_app_state_with_quotes(Arc::new(MockQuotes::with_quotes(vec![sample_quote()])))
    }

    #[must_use]
    pub fn test_app_state_with_quotes(quotes: Arc<dyn QuoteSource>) -> AppState {
        AppState::new(quotes, SessionConfig::default())
    }

    /// Seed a session holding `calc` and return its ID.
    pub async fn seed_session(state: &AppState, calc: CalculatorState) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = state.sessions.write().await;
        sessions.insert(id, CalculatorSession { state: calc, last_used: Instant::now() });
        id
    }
}
