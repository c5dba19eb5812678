use std::sync::Arc;

use services::{LessonLoader, ViewerConfig};

pub trait UiApp: Send + Sync {
    fn viewer_config(&self) -> ViewerConfig;
    fn lesson_loader(&self) -> LessonLoader;
}

#[derive(Clone)]
pub struct AppContext {
    config: Arc<ViewerConfig>,
    loader: LessonLoader,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            config: Arc::new(app.viewer_config()),
            loader: app.lesson_loader(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[must_use]
    pub fn loader(&self) -> LessonLoader {
        self.loader.clone()
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
