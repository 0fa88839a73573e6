//! HTTP server for the RELiSH hub session registry.
//!
//! Exposes the registry via REST and serves the join page.

mod error;
mod routes;
mod state;

use axum::{
    handler::Handler,
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;

pub use error::{ApiError, ErrorBody};
pub use routes::{request_base_url, CreateSessionResponse, EndSessionResponse};
pub use state::{JoinPage, SharedState, JOIN_PAGE_FILE};

/// Permissive CORS: any origin, method and header, with credentials.
///
/// Wildcards can't be combined with credentials, so the request's own
/// values are mirrored back instead. Tighten once the join client is hosted.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Build the router with every hub route.
///
/// When the state has a static directory, files under it are served for
/// any path no route claims.
pub fn router(state: Arc<SharedState>) -> Router {
    finish(hub_routes(state))
}

/// Like [`router`], with `fallback` answering paths no route claims.
///
/// A static directory on the state still takes precedence. The fallback is
/// installed before the CORS layer so its responses carry CORS headers too.
pub fn router_with_fallback<H, T>(state: Arc<SharedState>, fallback: H) -> Router
where
    H: Handler<T, ()>,
    T: 'static,
{
    let has_static_dir = state.static_dir.is_some();
    let app = hub_routes(state);
    if has_static_dir {
        finish(app)
    } else {
        finish(app.fallback(fallback))
    }
}

fn hub_routes(state: Arc<SharedState>) -> Router {
    let static_dir = state.static_dir.clone();

    let app = Router::new()
        .route("/health", get(routes::health))
        .route("/session", post(routes::create_session))
        .route(
            "/session/{session_id}",
            get(routes::get_session).delete(routes::end_session),
        )
        .route("/join", get(routes::join_page))
        .with_state(state);

    match static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    }
}

fn finish(app: Router) -> Router {
    app.layer(cors_layer())
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        log::info!("HTTP server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown.await;
            log::info!("HTTP server shutting down");
        })
        .await
}

// ============================================================================
// TESTS
// ============================================================================
