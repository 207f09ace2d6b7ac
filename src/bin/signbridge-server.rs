use anyhow::Result;
use signbridge::{app_name, build_runtime, load_config, serve};
use signbridge_metrics::TracingService;
use tracing::info;

fn main() -> Result<()> {
    let config = load_config()?;

    TracingService::init(config.server.environment)
        .map_err(|e| anyhow::anyhow!("initialising tracing: {e}"))?;

    info!(
        app = %app_name(),
        environment = ?config.server.environment,
        workers = config.server.workers,
        "Starting SignBridge server"
    );
    info!("Configuration loaded: {:?}", config);

    let runtime = build_runtime(&config)?;
    runtime.block_on(serve(config))
}
