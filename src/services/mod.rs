//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own session bookkeeping so route handlers can stay
//! focused on request parsing and response shaping.

pub mod session;
pub mod sweep;
