// Server loop module
// Accepts connections until a shutdown signal arrives.

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::ServerState;
use crate::logger;

/// Accept loop: each incoming connection is handed to a spawned task,
/// so a slow or broken client never stalls the listener.
///
/// Returns when the shutdown signal fires. Accept errors are logged and
/// the loop keeps going; they are per-connection failures, not fatal.
#[allow(clippy::ignored_unit_patterns)]
pub async fn run_accept_loop(
    listener: TcpListener,
    state: Arc<ServerState>,
    shutdown: Arc<Notify>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                // Spawned connection tasks are not drained; the process is
                // about to exit anyway.
                break;
            }
        }
    }

    Ok(())
}
