//! Liveness descriptor reported by `/health`.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// Service name reported in health checks.
pub const SERVICE_NAME: &str = "relish-hub";

/// Service version reported in health checks.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed health descriptor. Never depends on registry contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub ok: bool,
    pub service: String,
    pub version: String,
    pub t_ms: i64,
}

impl HealthStatus {
    /// Build the descriptor stamped with the clock's current time.
    pub fn now(clock: &dyn Clock) -> Self {
        Self {
            ok: true,
            service: SERVICE_NAME.to_string(),
            version: VERSION.to_string(),
            t_ms: clock.now_ms(),
        }
    }
}
