// Server loop module
// Accepts connections until a shutdown signal arrives

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Run the accept loop.
///
/// Each accepted connection is handed off to a spawned task; the loop
/// itself never blocks on a request. Returns cleanly when `shutdown` is
/// notified; in-flight responses are not awaited and may be truncated.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    active_connections: Arc<AtomicUsize>,
    shutdown: &Notify,
) -> std::io::Result<()> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn loop_exits_on_shutdown_notification() {
        let listener = super::super::create_reusable_listener("127.0.0.1:0".parse().unwrap())
            .unwrap();
        let state = Arc::new(AppState::new(Config::default()));
        let counter = Arc::new(AtomicUsize::new(0));
        let shutdown = Arc::new(Notify::new());

        let shutdown_clone = Arc::clone(&shutdown);
        let handle = tokio::spawn(async move {
            start_server_loop(listener, state, counter, &shutdown_clone).await
        });

        // Give the loop a tick to start waiting, then signal
        tokio::task::yield_now().await;
        shutdown.notify_one();

        let result = tokio::time::timeout(std::time::Duration::from_secs(5), handle)
            .await
            .expect("loop did not exit after shutdown")
            .unwrap();
        assert!(result.is_ok());
    }
}
