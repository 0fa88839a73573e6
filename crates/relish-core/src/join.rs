//! Join URL construction.
//!
//! Participants enter a session through `{base_url}/join?session_id={id}`.
//! The base URL comes from an explicit override (for dev tunnels and https
//! hostnames behind proxies) or, failing that, from the inbound request.

use crate::session::SessionId;

/// Pick the base URL for join links.
///
/// A non-empty `override_url` wins over `request_base`. Trailing slashes are
/// stripped either way.
pub fn resolve_base_url(override_url: Option<&str>, request_base: &str) -> String {
    let base = match override_url {
        Some(url) if !url.is_empty() => url,
        _ => request_base,
    };
    base.trim_end_matches('/').to_string()
}

/// Build the join link for a session.
pub fn join_url(base_url: &str, session_id: &SessionId) -> String {
    format!("{}/join?session_id={}", base_url, session_id)
}
