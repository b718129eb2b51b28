//! Request handler module
//!
//! Method gating, static file serving and access logging.

pub mod listing;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
