//! RELiSH hub daemon.
//!
//! Runs the session registry HTTP server until Ctrl-C.

mod assets;
mod cli;

use axum::Router;
use clap::Parser;
use relish_core::{HubConfig, SessionRegistry};
use relish_http::SharedState;
use std::sync::Arc;

use cli::Cli;

/// Build the full application: hub routes plus built-in assets when no
/// static directory is given.
fn build_app(cli: &Cli, config: HubConfig) -> Router {
    let registry = Arc::new(SessionRegistry::new());
    let state = SharedState::new(registry, config);

    match &cli.static_dir {
        Some(dir) => relish_http::router(Arc::new(state.with_static_dir(dir.clone()))),
        None => relish_http::router_with_fallback(
            Arc::new(state.with_join_page(assets::join_page())),
            assets::static_handler,
        ),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = HubConfig::from_env().with_base_url(cli.base_url.clone());

    let addr = match cli.addr() {
        Ok(addr) => addr,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(2);
        }
    };

    match &config.base_url_override {
        Some(url) => log::info!("Join links use base URL {}", url),
        None => log::info!("Join links use the request host"),
    }

    let app = build_app(&cli, config);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind HTTP server to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    log::info!("RELiSH MR Hub v{} starting", relish_core::health::VERSION);

    if let Err(e) = relish_http::serve(listener, app, shutdown_signal()).await {
        log::error!("HTTP server error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn default_app_serves_embedded_join_page() {
        let cli = Cli::parse_from(["relish-hub"]);
        let app = build_app(&cli, HubConfig::default());

        let response = app
            .oneshot(Request::get("/join?session_id=abc123de01").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("session_id"));
    }

    #[tokio::test]
    async fn default_app_serves_embedded_assets() {
        let cli = Cli::parse_from(["relish-hub"]);
        let app = build_app(&cli, HubConfig::default());

        let response = app
            .oneshot(Request::get("/join.css").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn embedded_assets_carry_cors_headers() {
        let cli = Cli::parse_from(["relish-hub"]);
        let app = build_app(&cli, HubConfig::default());

        for path in ["/join.css", "/join", "/health"] {
            let response = app
                .clone()
                .oneshot(
                    Request::get(path)
                        .header(header::ORIGIN, "https://headset.example")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{}", path);
            assert_eq!(
                response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
                Some(&header::HeaderValue::from_static("https://headset.example")),
                "{}",
                path
            );
        }
    }

    #[tokio::test]
    async fn default_app_keeps_api_routes() {
        let cli = Cli::parse_from(["relish-hub"]);
        let app = build_app(&cli, HubConfig::default());

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
