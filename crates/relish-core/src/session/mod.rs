//! Session registry for hub gatherings.
//!
//! Sessions live in memory only, from `create` until `end`. The join page and
//! any signaling/relay service consume the records produced here.

mod registry;
mod state;

pub use registry::{EndedSession, SessionError, SessionRegistry};
pub use state::{Session, SessionId, SessionState};
