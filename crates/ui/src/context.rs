use std::sync::Arc;

use folio_core::SiteConfig;

pub trait UiApp: Send + Sync {
    fn config(&self) -> SiteConfig;
}

#[derive(Clone)]
pub struct AppContext {
    config: SiteConfig,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            config: app.config(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.config.title
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
