use signbridge_metrics::MetricsService;
use signbridge_models::Config;
use signbridge_translator::CachedTranslator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translator: Arc<CachedTranslator>,
    pub metrics: Arc<MetricsService>,
}

impl AppState {
    pub fn new(
        config: Config,
        translator: Arc<CachedTranslator>,
        metrics: Arc<MetricsService>,
    ) -> Self {
        Self {
            config,
            translator,
            metrics,
        }
    }
}
