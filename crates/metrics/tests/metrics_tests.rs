use signbridge_metrics::*;

#[test]
fn test_metrics_service_creation() {
    let service = MetricsService::new().unwrap();

    let metrics_text = futures::executor::block_on(service.get_prometheus_metrics()).unwrap();
    assert!(metrics_text.contains("signbridge_translations_total"));
    assert!(metrics_text.contains("signbridge_translation_duration_ms"));
}

#[test]
fn test_metric_name_registration() {
    let service = MetricsService::new().unwrap();
    let metrics_text = futures::executor::block_on(service.get_prometheus_metrics()).unwrap();

    let expected_metrics = [
        "signbridge_translations_total",
        "signbridge_translation_errors_total",
        "signbridge_cache_hits_total",
        "signbridge_cache_misses_total",
        "signbridge_requests_rejected_total",
        "signbridge_translation_duration_ms",
    ];

    for metric in &expected_metrics {
        assert!(metrics_text.contains(metric), "Missing metric: {}", metric);
    }
}

#[test]
fn test_record_translation_counts() {
    let service = MetricsService::new().unwrap();
    service.record_translation(true, Some(false), 3.0);
    service.record_translation(false, Some(false), 1.0);
    service.record_translation(true, Some(true), 0.5);
    service.record_rejected();

    assert_eq!(service.translations_total(), 3.0);
    let text = futures::executor::block_on(service.get_prometheus_metrics()).unwrap();
    assert!(text.contains("signbridge_translation_errors_total 1"));
    assert!(text.contains("signbridge_cache_hits_total 1"));
    assert!(text.contains("signbridge_cache_misses_total 2"));
    assert!(text.contains("signbridge_requests_rejected_total 1"));
    assert!(text.contains("signbridge_translation_duration_ms_count 3"));
}

#[test]
fn test_uncached_translations_skip_cache_counters() {
    let service = MetricsService::new().unwrap();
    service.record_translation(true, None, 2.0);
    service.record_translation(true, None, 2.0);

    assert_eq!(service.translations_total(), 2.0);
    let text = futures::executor::block_on(service.get_prometheus_metrics()).unwrap();
    assert!(text.contains("signbridge_cache_hits_total 0"));
    assert!(text.contains("signbridge_cache_misses_total 0"));
}

#[test]
fn test_independent_registries() {
    // Each service owns its registry, so two instances never collide
    let a = MetricsService::new().unwrap();
    let b = MetricsService::new().unwrap();
    a.record_rejected();
    let text = futures::executor::block_on(b.get_prometheus_metrics()).unwrap();
    assert!(text.contains("signbridge_requests_rejected_total 0"));
}
