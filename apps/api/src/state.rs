use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::manuscript::store::ManuscriptStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one manuscript every generation request reads. Owned here, not in a global.
    pub manuscripts: ManuscriptStore,
    /// Upstream text generator. Default: `GeminiClient`; tests swap in a fake.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>, config: Config) -> Self {
        Self {
            manuscripts: ManuscriptStore::new(),
            generator,
            config,
        }
    }
}
