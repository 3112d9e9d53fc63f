//! Idle-session sweeper.
//!
//! DESIGN
//! ======
//! A background task wakes every `sweep_interval`, drops sessions whose
//! `last_used` is older than `idle_ttl`, and logs how many went away. A
//! calculator view that was closed never says so, so expiry is how its
//! state gets discarded.

use std::time::Instant;

use tokio::task::JoinHandle;
use tracing::info;

use crate::state::AppState;

/// Spawn the background sweep task. Returns a handle for shutdown.
pub fn spawn_sweep_task(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(state.session_config.sweep_interval);
        loop {
            interval.tick().await;
            let removed = sweep_idle(&state, Instant::now()).await;
            if removed > 0 {
                info!(removed, "expired idle calculator sessions");
            }
        }
    })
}

/// Remove sessions idle for longer than the TTL as of `now`. Returns the count removed.
pub async fn sweep_idle(state: &AppState, now: Instant) -> usize {
    let ttl = state.session_config.idle_ttl;
    let mut sessions = state.sessions.write().await;
    let before = sessions.len();
    sessions.retain(|_, session| now.saturating_duration_since(session.last_used) <= ttl);
    before - sessions.len()
}

#[cfg(test)]
#[path = "sweep_test.rs"]
mod tests;
