//! Shared state for the HTTP server.
//!
//! Wraps the SessionRegistry and the configuration handlers need to build
//! join links and serve the join page.

use relish_core::{HubConfig, SessionRegistry};
use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

/// File name of the join page inside a static directory.
pub const JOIN_PAGE_FILE: &str = "join.html";

/// Where `GET /join` gets its HTML from.
#[derive(Debug, Clone, Default)]
pub enum JoinPage {
    /// Read from disk on every request.
    File(PathBuf),
    /// Served from memory (e.g. assets compiled into the binary).
    Inline(Cow<'static, [u8]>),
    /// No page configured; `/join` answers 404.
    #[default]
    Unavailable,
}

/// Shared state available to all HTTP handlers.
pub struct SharedState {
    /// The registry owning all live sessions.
    pub registry: Arc<SessionRegistry>,
    /// Hub configuration (base URL override).
    pub config: HubConfig,
    /// Source of the join page.
    pub join_page: JoinPage,
    /// Directory served as a fallback for static assets.
    pub static_dir: Option<PathBuf>,
}

impl SharedState {
    /// Create a new shared state with the given registry and configuration.
    pub fn new(registry: Arc<SessionRegistry>, config: HubConfig) -> Self {
        Self {
            registry,
            config,
            join_page: JoinPage::Unavailable,
            static_dir: None,
        }
    }

    /// Serve assets and the join page from `dir`.
    pub fn with_static_dir(mut self, dir: PathBuf) -> Self {
        self.join_page = JoinPage::File(dir.join(JOIN_PAGE_FILE));
        self.static_dir = Some(dir);
        self
    }

    /// Set the join page source.
    pub fn with_join_page(mut self, join_page: JoinPage) -> Self {
        self.join_page = join_page;
        self
    }
}
