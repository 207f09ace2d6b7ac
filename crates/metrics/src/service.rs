use prometheus::{Counter, Encoder, Histogram, HistogramOpts, Registry, TextEncoder};
use signbridge_models::SignError;
use tracing::instrument;

pub struct MetricsService {
    registry: Registry,
    translations_total: Counter,
    translation_errors_total: Counter,
    cache_hits_total: Counter,
    cache_misses_total: Counter,
    requests_rejected_total: Counter,
    translation_duration_ms: Histogram,
}

fn internal(e: prometheus::Error) -> SignError {
    SignError::Internal {
        reason: e.to_string(),
    }
}

impl MetricsService {
    pub fn new() -> Result<Self, SignError> {
        let registry = Registry::new();

        let translations_total = Counter::new(
            "signbridge_translations_total",
            "Total number of translations served",
        )
        .map_err(internal)?;

        let translation_errors_total = Counter::new(
            "signbridge_translation_errors_total",
            "Total number of translations that failed",
        )
        .map_err(internal)?;

        let cache_hits_total = Counter::new(
            "signbridge_cache_hits_total",
            "Translations served from the cache",
        )
        .map_err(internal)?;

        let cache_misses_total = Counter::new(
            "signbridge_cache_misses_total",
            "Translations computed because the cache had no entry",
        )
        .map_err(internal)?;

        let requests_rejected_total = Counter::new(
            "signbridge_requests_rejected_total",
            "Translate requests rejected before translation",
        )
        .map_err(internal)?;

        let translation_duration_ms = Histogram::with_opts(HistogramOpts::new(
            "signbridge_translation_duration_ms",
            "Translation processing time in milliseconds",
        ))
        .map_err(internal)?;

        registry
            .register(Box::new(translations_total.clone()))
            .map_err(internal)?;
        registry
            .register(Box::new(translation_errors_total.clone()))
            .map_err(internal)?;
        registry
            .register(Box::new(cache_hits_total.clone()))
            .map_err(internal)?;
        registry
            .register(Box::new(cache_misses_total.clone()))
            .map_err(internal)?;
        registry
            .register(Box::new(requests_rejected_total.clone()))
            .map_err(internal)?;
        registry
            .register(Box::new(translation_duration_ms.clone()))
            .map_err(internal)?;

        Ok(Self {
            registry,
            translations_total,
            translation_errors_total,
            cache_hits_total,
            cache_misses_total,
            requests_rejected_total,
            translation_duration_ms,
        })
    }

    /// Record one completed translation (successful or not). `cache_hit` is
    /// `None` when no cache is configured.
    pub fn record_translation(&self, success: bool, cache_hit: Option<bool>, duration_ms: f64) {
        self.translations_total.inc();
        if !success {
            self.translation_errors_total.inc();
        }
        match cache_hit {
            Some(true) => self.cache_hits_total.inc(),
            Some(false) => self.cache_misses_total.inc(),
            None => {}
        }
        self.translation_duration_ms.observe(duration_ms);
    }

    pub fn record_rejected(&self) {
        self.requests_rejected_total.inc();
    }

    pub fn translations_total(&self) -> f64 {
        self.translations_total.get()
    }

    #[instrument(skip(self))]
    pub async fn get_prometheus_metrics(&self) -> Result<String, SignError> {
        let metric_families = self.registry.gather();
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();

        encoder.encode(&metric_families, &mut buffer).map_err(internal)?;

        String::from_utf8(buffer).map_err(|e| SignError::Internal {
            reason: e.to_string(),
        })
    }
}
