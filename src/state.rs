use std::time::Duration;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::render::Renderer;

/// Everything a request handler needs. Immutable once built, shared as
/// `Arc<AppState>`.
pub struct AppState {
    pub catalog: Catalog,
    pub renderer: Renderer,
    pub api_delay: Duration,
}

impl AppState {
    pub fn new(config: &Config, catalog: Catalog) -> Self {
        Self {
            catalog,
            renderer: Renderer::new(config.site.clone(), config.content.escape_html),
            api_delay: Duration::from_millis(config.server.api_delay_ms),
        }
    }
}
