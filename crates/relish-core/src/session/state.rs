//! Per-session record.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Number of hex characters in a generated session id.
pub const SESSION_ID_LEN: usize = 10;

/// Unique identifier for a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generate a short random id: the first [`SESSION_ID_LEN`] hex digits of a v4 UUID.
    pub fn new() -> Self {
        let mut hex = Uuid::new_v4().simple().to_string();
        hex.truncate(SESSION_ID_LEN);
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Lifecycle tag of a session. Only `Created` is ever assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    Created,
}

/// A single hub session.
///
/// Field order matches the wire format of `GET /session/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: SessionId,

    /// Creation time in ms since epoch. Never changes.
    pub created_at: i64,

    pub state: SessionState,

    /// Participant id -> metadata. Reserved; nothing mutates it yet.
    pub participants: HashMap<String, serde_json::Value>,

    /// Reserved; stays equal to `created_at`.
    pub last_activity: i64,
}

impl Session {
    pub fn new(session_id: SessionId, created_at: i64) -> Self {
        Self {
            session_id,
            created_at,
            state: SessionState::Created,
            participants: HashMap::new(),
            last_activity: created_at,
        }
    }
}
