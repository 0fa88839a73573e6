//! HTTP route handlers for the session registry.
//!
//! Handlers are thin: they pull what they need out of the request, call the
//! registry, and shape the JSON response.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, Uri},
    response::{Html, IntoResponse, Json, Response},
};
use relish_core::{join, HealthStatus, Session, SessionId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::{JoinPage, SharedState};

/// Response for `POST /session`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
    pub join_url: String,
    pub created_at: i64,
}

/// Response for `DELETE /session/{session_id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct EndSessionResponse {
    pub ok: bool,
    pub session_id: String,
    pub duration_ms: i64,
}

/// Handler for GET /health
pub async fn health(State(state): State<Arc<SharedState>>) -> Json<HealthStatus> {
    log::debug!("HTTP health check");
    Json(state.registry.health())
}

/// Handler for POST /session
pub async fn create_session(
    State(state): State<Arc<SharedState>>,
    headers: HeaderMap,
    uri: Uri,
) -> Json<CreateSessionResponse> {
    let session = state.registry.create_session();

    let base_url = join::resolve_base_url(
        state.config.base_url_override.as_deref(),
        &request_base_url(&headers, &uri),
    );
    let join_url = join::join_url(&base_url, &session.session_id);

    log::info!(
        "Created session {} ({} live)",
        session.session_id,
        state.registry.len()
    );

    Json(CreateSessionResponse {
        session_id: session.session_id.0,
        join_url,
        created_at: session.created_at,
    })
}

/// Handler for GET /session/{session_id}
pub async fn get_session(
    Path(session_id): Path<String>,
    State(state): State<Arc<SharedState>>,
) -> Result<Json<Session>, ApiError> {
    log::debug!("HTTP get session: {}", session_id);
    let session = state.registry.get_session(&SessionId(session_id))?;
    Ok(Json(session))
}

/// Handler for DELETE /session/{session_id}
pub async fn end_session(
    Path(session_id): Path<String>,
    State(state): State<Arc<SharedState>>,
) -> Result<Json<EndSessionResponse>, ApiError> {
    let ended = state.registry.end_session(&SessionId(session_id))?;

    log::info!(
        "Ended session {} after {} ms",
        ended.session.session_id,
        ended.duration_ms
    );

    Ok(Json(EndSessionResponse {
        ok: true,
        session_id: ended.session.session_id.0,
        duration_ms: ended.duration_ms,
    }))
}

/// Handler for GET /join
///
/// The page itself (WebSocket + WebRTC client) lives outside this crate.
pub async fn join_page(State(state): State<Arc<SharedState>>) -> Response {
    match &state.join_page {
        JoinPage::Inline(html) => Html(html.clone()).into_response(),
        JoinPage::File(path) => match tokio::fs::read(path).await {
            Ok(bytes) => Html(bytes).into_response(),
            Err(e) => {
                log::warn!("Failed to read join page {}: {}", path.display(), e);
                ApiError::JoinPageNotFound.into_response()
            }
        },
        JoinPage::Unavailable => {
            log::warn!("Join page requested but none is configured");
            ApiError::JoinPageNotFound.into_response()
        }
    }
}

/// `{scheme}://{host}` of the inbound request.
///
/// Absolute URIs (HTTP/2) carry their own scheme and authority; otherwise the
/// scheme defaults to `http` and the host comes from the `Host` header.
pub fn request_base_url(headers: &HeaderMap, uri: &Uri) -> String {
    let scheme = uri.scheme_str().unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| uri.authority().map(|authority| authority.as_str()))
        .unwrap_or("localhost");
    format!("{}://{}", scheme, host)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};
    use relish_core::{HubConfig, SessionRegistry};
    use std::borrow::Cow;

    fn test_state(config: HubConfig) -> Arc<SharedState> {
        Arc::new(SharedState::new(Arc::new(SessionRegistry::new()), config))
    }

    fn host_headers(host: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static(host));
        headers
    }

    mod request_base_url {
        use super::*;

        #[test]
        fn uses_host_header() {
            let uri: Uri = "/session".parse().unwrap();
            assert_eq!(
                request_base_url(&host_headers("hub.local:8000"), &uri),
                "http://hub.local:8000"
            );
        }

        #[test]
        fn absolute_uri_supplies_scheme() {
            let uri: Uri = "https://hub.example.com/session".parse().unwrap();
            assert_eq!(
                request_base_url(&HeaderMap::new(), &uri),
                "https://hub.example.com"
            );
        }

        #[test]
        fn falls_back_to_localhost() {
            let uri: Uri = "/session".parse().unwrap();
            assert_eq!(request_base_url(&HeaderMap::new(), &uri), "http://localhost");
        }
    }

    #[tokio::test]
    async fn create_session_builds_join_url_from_host() {
        let state = test_state(HubConfig::default());
        let uri: Uri = "/session".parse().unwrap();

        let Json(response) =
            create_session(State(state.clone()), host_headers("127.0.0.1:8000"), uri).await;

        assert_eq!(
            response.join_url,
            format!("http://127.0.0.1:8000/join?session_id={}", response.session_id)
        );
        assert_eq!(state.registry.len(), 1);
    }

    #[tokio::test]
    async fn create_session_prefers_configured_base_url() {
        let state = test_state(HubConfig {
            base_url_override: Some("https://relish.example.dev/".to_string()),
        });
        let uri: Uri = "/session".parse().unwrap();

        let Json(response) = create_session(State(state), host_headers("127.0.0.1:8000"), uri).await;

        assert!(response
            .join_url
            .starts_with("https://relish.example.dev/join?session_id="));
    }

    #[tokio::test]
    async fn get_session_missing_is_not_found() {
        let state = test_state(HubConfig::default());
        let result = get_session(Path("doesnotexist".to_string()), State(state)).await;
        assert!(matches!(result, Err(ApiError::SessionNotFound(_))));
    }

    #[tokio::test]
    async fn end_session_returns_duration() {
        let state = test_state(HubConfig::default());
        let id = state.registry.create_session().session_id;

        let Json(response) = end_session(Path(id.0.clone()), State(state.clone()))
            .await
            .unwrap();

        assert!(response.ok);
        assert_eq!(response.session_id, id.0);
        assert!(response.duration_ms >= 0);
        assert!(state.registry.is_empty());
    }

    #[tokio::test]
    async fn join_page_unavailable_is_not_found() {
        let state = test_state(HubConfig::default());
        let response = join_page(State(state)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn join_page_inline_is_html() {
        let registry = Arc::new(SessionRegistry::new());
        let state = Arc::new(
            SharedState::new(registry, HubConfig::default())
                .with_join_page(JoinPage::Inline(Cow::Borrowed(b"<h1>join</h1>"))),
        );
        let response = join_page(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
    }

    #[test]
    fn end_session_response_serialization() {
        let response = EndSessionResponse {
            ok: true,
            session_id: "abc123de01".to_string(),
            duration_ms: 1500,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"ok":true,"session_id":"abc123de01","duration_ms":1500}"#
        );
    }
}
