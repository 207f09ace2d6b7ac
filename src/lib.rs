//! Server bootstrap: configuration, directory layout, runtime and the
//! background cache purge.

pub use signbridge_api::{build_router, build_state, start_server, AppState};
pub use signbridge_models::Config;

use anyhow::{Context, Result};
use signbridge_metrics::TracingService;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "configs/default.toml";
pub const CACHE_PURGE_INTERVAL: Duration = Duration::from_secs(3600);

/// `SIGNBRIDGE_CONFIG` if set, otherwise `configs/default.toml`.
pub fn config_path() -> PathBuf {
    std::env::var_os("SIGNBRIDGE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Application name for startup logs: `SIGNBRIDGE_APP`, then `FLASK_APP`.
pub fn app_name() -> String {
    ["SIGNBRIDGE_APP", "FLASK_APP"]
        .iter()
        .find_map(|key| std::env::var(key).ok())
        .unwrap_or_else(|| "signbridge".to_string())
}

pub fn load_config() -> Result<Config> {
    let path = config_path();
    let config = Config::load(&path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;
    Ok(config)
}

/// Create every directory the server writes to or serves from.
pub fn prepare_directories(config: &Config) -> Result<()> {
    for dir in config.required_dirs() {
        fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    Ok(())
}

/// Tokio runtime sized by `server.workers`.
pub fn build_runtime(config: &Config) -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.workers)
        .thread_name("signbridge-worker")
        .enable_all()
        .build()
}

/// Periodically drop expired cache entries. `None` when caching is off.
pub fn spawn_cache_purge(state: &AppState, every: Duration) -> Option<JoinHandle<()>> {
    state.translator.cache()?;
    let translator = state.translator.clone();

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let translator = translator.clone();
            let purged = tokio::task::spawn_blocking(move || {
                translator.cache().map(|cache| cache.purge_expired())
            })
            .await;
            match purged {
                Ok(Some(Ok(removed))) => TracingService::log_cache_purge(removed),
                Ok(Some(Err(e))) => warn!("Cache purge failed: {}", e),
                Ok(None) => {}
                Err(e) => warn!("Cache purge task failed: {}", e),
            }
        }
    }))
}

pub async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(err) => warn!("Unable to listen for shutdown signal: {}", err),
    }
}

/// Everything after the runtime exists: directories, state, purge task and
/// the HTTP server.
pub async fn serve(config: Config) -> Result<()> {
    prepare_directories(&config)?;

    let state = build_state(config)?;
    let purge = spawn_cache_purge(&state, CACHE_PURGE_INTERVAL);

    let result = start_server(state, shutdown_signal()).await;

    if let Some(handle) = purge {
        handle.abort();
    }
    info!("SignBridge server shutdown complete");
    result
}
