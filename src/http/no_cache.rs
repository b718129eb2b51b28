//! Cache-disabling header injection
//!
//! The whole point of this server: every response, success or error,
//! tells clients and intermediaries never to cache it.

use hyper::header::{HeaderValue, CACHE_CONTROL, EXPIRES, PRAGMA};
use hyper::Response;

pub const CACHE_CONTROL_VALUE: &str = "no-cache, no-store, must-revalidate";
pub const PRAGMA_VALUE: &str = "no-cache";
pub const EXPIRES_VALUE: &str = "0";

/// Append the three no-cache headers to a response.
///
/// Must be the last thing a response builder does, so the headers land
/// after everything the builder already queued. `insert` also replaces
/// any earlier value, so no builder can accidentally override these.
pub fn disable_caching<B>(response: &mut Response<B>) {
    let headers = response.headers_mut();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL_VALUE));
    headers.insert(PRAGMA, HeaderValue::from_static(PRAGMA_VALUE));
    headers.insert(EXPIRES, HeaderValue::from_static(EXPIRES_VALUE));
}
