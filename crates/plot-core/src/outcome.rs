//! Outcome of one network attempt.
//!
//! These are **transport-agnostic** logical results: the network layer
//! produces exactly one [`ResponseOutcome`] per submission and the
//! [`interpreter`](crate::interpreter) folds it back into the form state.

/// Fallback message when the backend reports a failure without an
/// `error` field in the body.
pub const DEFAULT_BACKEND_ERROR: &str = "Failed to fetch stock data";

/// Message shown when the request never completed (connection refused,
/// timeout, unreadable body). Deliberately distinct from
/// [`DEFAULT_BACKEND_ERROR`] so "server rejected input" and "could not
/// reach server" stay distinguishable.
pub const TRANSPORT_ERROR_MESSAGE: &str = "An error occurred while fetching the data";

/// The single result of one plot request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// Backend produced a plot; carries the bare base64 PNG payload
    /// (no data-URI prefix).
    Success(String),

    /// Backend explicitly rejected the request. The network layer has
    /// already substituted [`DEFAULT_BACKEND_ERROR`] if the body carried
    /// no message.
    Failure(String),

    /// The call failed before a backend verdict was available.
    TransportError,
}
