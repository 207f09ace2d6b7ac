use signbridge_models::{Environment, SignLanguage};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

pub struct TracingService;

impl TracingService {
    /// JSON lines with UTC timestamps in production, readable output in
    /// development. `RUST_LOG` overrides the default `info` level.
    pub fn init(environment: Environment) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        if environment.is_production() {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
                .try_init()?;
        } else {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .try_init()?;
        }

        Ok(())
    }

    pub fn log_translation_completed(
        language: SignLanguage,
        text_len: usize,
        video_path: Option<&str>,
        duration_ms: f64,
        cache_hit: bool,
    ) {
        info!(
            language = %language,
            text_len = text_len,
            video_path = %video_path.unwrap_or("none"),
            duration_ms = duration_ms,
            cache_hit = cache_hit,
            "Translation completed"
        );
    }

    pub fn log_translation_failed(language: SignLanguage, text_len: usize, error_message: &str) {
        error!(
            language = %language,
            text_len = text_len,
            error_message = %error_message,
            "Translation failed"
        );
    }

    pub fn log_request_rejected(reason: &str) {
        warn!(reason = %reason, "Translate request rejected");
    }

    pub fn log_cache_purge(removed: usize) {
        info!(removed = removed, "Cache purge completed");
    }
}
