use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use servedir::config::{AppState, Config};
use servedir::logger;
use servedir::server;
use servedir::server::signal::{start_signal_handler, SignalHandler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let state = Arc::new(AppState::new(cfg));
    let active_connections = Arc::new(AtomicUsize::new(0));

    let signals = Arc::new(SignalHandler::new());
    start_signal_handler(Arc::clone(&signals));

    logger::log_server_start(&state.config);

    server::start_server_loop(listener, state, active_connections, &signals.shutdown).await?;

    // The accept loop only returns once a shutdown signal arrives. In-flight
    // responses may be cut short; exit code is 0 either way.
    logger::log_server_stopped();
    Ok(())
}
