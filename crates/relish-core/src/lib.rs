//! # relish-core
//!
//! Core business logic for the RELiSH hub session registry.
//!
//! This crate is framework-agnostic and can be used by:
//! - The HTTP adapter (via REST routes)
//! - Future signaling/relay services that consume session records
//!
//! ## Key Concepts
//!
//! - **Session**: A registry record representing one hub gathering
//! - **SessionRegistry**: The exclusive owner of the id → session mapping
//! - **Join URL**: Externally resolvable link participants use to enter a session

pub mod clock;
pub mod config;
pub mod health;
pub mod join;
pub mod session;

// Re-export commonly used types
pub use clock::{Clock, SystemClock};
pub use config::HubConfig;
pub use health::HealthStatus;
pub use session::{EndedSession, Session, SessionError, SessionId, SessionRegistry, SessionState};
