//! Logger module
//!
//! Console output for the server: startup banner, shutdown notice,
//! warnings and errors to stderr, and one `[SERVER] `-prefixed access-log
//! line per handled request to stdout.

mod format;

pub use format::AccessLogEntry;

use crate::config::ServerState;
use std::net::SocketAddr;

/// Prefix on every access-log line
pub const ACCESS_LOG_PREFIX: &str = "[SERVER] ";

pub fn log_server_start(addr: &SocketAddr, state: &ServerState) {
    println!("======================================");
    println!("Static file server started");
    println!("Listening on: http://{addr}");
    println!("URL: http://localhost:{}", addr.port());
    println!("Serving directory: {}", state.root.display());
    println!("No-cache headers enabled");
    if let Some(workers) = state.config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Press Ctrl+C to stop");
    println!("======================================\n");
}

pub fn log_shutdown() {
    println!("\nServer stopped");
}

/// Write a formatted access-log entry to stdout
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    println!("{ACCESS_LOG_PREFIX}{}", entry.format(format));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
