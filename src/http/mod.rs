//! HTTP protocol layer module
//!
//! Response construction, MIME detection, percent codec and the
//! cache-disabling header injection shared by every response.

pub mod mime;
pub mod no_cache;
pub mod percent;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_403_response, build_404_response, build_405_response, build_500_response,
    build_directory_redirect, build_file_response, build_html_response, build_options_response,
};
