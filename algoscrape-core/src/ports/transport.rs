//! HTTP transport port
//!
//! Defines the request/response collaborator the fetch protocols depend on.
//! Adapters provide the real network client; tests substitute scripted ones.

use crate::domain::result::Result;

/// Synchronous GET-only HTTP transport
///
/// One request is in flight at a time. Implementations own any timeout
/// policy; callers only see success or an error.
pub trait HttpTransport: Send + Sync {
    /// Issue a GET against a fully formed `url` and return the response body
    ///
    /// Connection failures, timeouts and non-success statuses are returned
    /// as [`Error::Transport`](crate::domain::result::Error::Transport).
    fn get(&self, url: &str) -> Result<String>;
}
