//! SessionRegistry - the exclusive owner of live sessions.

use super::state::{Session, SessionId};
use crate::clock::{Clock, SystemClock};
use crate::health::HealthStatus;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),
}

/// A session removed by [`SessionRegistry::end_session`].
#[derive(Debug, Clone, PartialEq)]
pub struct EndedSession {
    pub session: Session,
    /// Lifetime of the session in ms (never negative).
    pub duration_ms: i64,
}

/// Holds every live session, keyed by id.
///
/// Constructed once at startup and shared behind an `Arc`. Each operation is
/// a single map operation under one lock, so readers never see a partially
/// inserted or removed record.
pub struct SessionRegistry {
    sessions: RwLock<HashMap<SessionId, Session>>,
    clock: Arc<dyn Clock>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a registry that reads time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Create a new session and return a copy of its record.
    pub fn create_session(&self) -> Session {
        let now = self.clock.now_ms();
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);

        let mut id = SessionId::new();
        while sessions.contains_key(&id) {
            log::warn!("Session id collision on {}, regenerating", id);
            id = SessionId::new();
        }

        let session = Session::new(id.clone(), now);
        sessions.insert(id, session.clone());
        session
    }

    /// Get a copy of a session by ID.
    pub fn get_session(&self, session_id: &SessionId) -> Result<Session, SessionError> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(session_id)
            .cloned()
            .ok_or_else(|| SessionError::NotFound(session_id.clone()))
    }

    /// Remove a session and report how long it lived.
    pub fn end_session(&self, session_id: &SessionId) -> Result<EndedSession, SessionError> {
        let session = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(session_id)
            .ok_or_else(|| SessionError::NotFound(session_id.clone()))?;

        let duration_ms = (self.clock.now_ms() - session.created_at).max(0);
        Ok(EndedSession {
            session,
            duration_ms,
        })
    }

    /// Liveness descriptor. Does not look at the sessions.
    pub fn health(&self) -> HealthStatus {
        HealthStatus::now(self.clock.as_ref())
    }

    /// List all live session IDs.
    pub fn list_sessions(&self) -> Vec<SessionId> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
