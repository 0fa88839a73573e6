//! Static assets compiled into the binary.

use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use relish_http::{JoinPage, JOIN_PAGE_FILE};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "static/"]
pub struct Assets;

/// The built-in join page, if it was embedded.
pub fn join_page() -> JoinPage {
    match Assets::get(JOIN_PAGE_FILE) {
        Some(file) => JoinPage::Inline(file.data),
        None => JoinPage::Unavailable,
    }
}

/// Fallback handler serving embedded assets by path.
pub async fn static_handler(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    match Assets::get(path) {
        Some(file) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref().to_string())], file.data).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
