pub mod assets;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use assets::*;
pub use handlers::*;
pub use middleware::*;
pub use routes::*;
pub use state::*;

use signbridge_cache::TranslationCache;
use signbridge_metrics::MetricsService;
use signbridge_models::{Config, SignError};
use signbridge_translator::{CachedTranslator, SignLanguageTranslator, VideoStore};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Wire the translator, cache and metrics for `config`.
pub fn build_state(config: Config) -> Result<AppState, SignError> {
    let store = Arc::new(VideoStore::new(&config.storage.videos_dir)?);
    let cache = if config.cache.enabled {
        Some(TranslationCache::new(
            &config.storage.cache_dir,
            Duration::from_secs(config.cache.ttl_secs),
        )?)
    } else {
        None
    };
    let translator = Arc::new(CachedTranslator::new(
        SignLanguageTranslator::new(store),
        cache,
    ));
    let metrics = Arc::new(MetricsService::new()?);

    Ok(AppState::new(config, translator, metrics))
}

/// Serve until `shutdown` resolves.
pub async fn start_server(
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let addr = format!("{}:{}", state.config.server.bind, state.config.server.port);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("SignBridge API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
