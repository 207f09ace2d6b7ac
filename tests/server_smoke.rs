use signbridge::*;
use std::time::Duration;
use tokio::sync::oneshot;

fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

#[test]
fn default_deployment_surface() {
    let config = Config::default();
    assert_eq!(config.server.bind, "0.0.0.0");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.server.workers, 4);
}

#[test]
fn committed_config_matches_defaults() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_PATH);
    let from_file: Config = Config::figment(&path).extract().unwrap();
    assert_eq!(from_file.server.port, 5000);
    assert_eq!(from_file.storage, Config::default().storage);
    assert_eq!(from_file.cache, Config::default().cache);
}

#[test]
fn dockerfile_sets_deployment_environment() {
    let dockerfile = include_str!("../Dockerfile");
    assert!(dockerfile.contains("FLASK_APP=app.py"));
    assert!(dockerfile.contains("FLASK_ENV=production"));
    assert!(dockerfile.contains("EXPOSE 5000"));
}

#[test]
fn runtime_uses_configured_workers() {
    let mut config = Config::default();
    config.server.workers = 2;
    let runtime = build_runtime(&config).unwrap();
    assert_eq!(runtime.metrics().num_workers(), 2);
}

#[test]
fn prepare_directories_creates_layout() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default().rooted_at(dir.path());
    prepare_directories(&config).unwrap();
    for sub in ["static/videos", "static/css", "static/js", "templates", "cache"] {
        assert!(dir.path().join(sub).is_dir(), "missing {sub}");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn server_starts_and_translates() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut config = Config::default().rooted_at(dir.path());
    config.server.bind = "127.0.0.1".to_string();
    config.server.port = free_port();
    prepare_directories(&config)?;

    let base = format!("http://127.0.0.1:{}", config.server.port);
    let state = build_state(config)?;
    let (tx, rx) = oneshot::channel::<()>();
    let server = tokio::spawn(start_server(state, async {
        let _ = rx.await;
    }));

    let client = reqwest::Client::new();
    let mut healthy = false;
    for _ in 0..50 {
        if let Ok(res) = client.get(format!("{base}/healthz")).send().await {
            healthy = res.status().is_success();
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    assert!(healthy, "server never became healthy");

    let res = client
        .post(format!("{base}/translate"))
        .json(&serde_json::json!({"text": "you like music", "language": "isl"}))
        .send()
        .await?;
    assert!(res.status().is_success());
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["isl_gloss"], "YOU MUSIC LIKE");

    tx.send(()).ok();
    server.await??;
    Ok(())
}

#[tokio::test]
async fn cache_purge_disabled_without_cache() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default().rooted_at(dir.path());
    config.cache.enabled = false;
    let state = build_state(config).unwrap();
    assert!(spawn_cache_purge(&state, Duration::from_secs(60)).is_none());
}
