//! plot-client
//!
//! Async orchestration around the pure session logic:
//! - [`config`]  : environment-driven client configuration
//! - [`network`] : the reqwest-backed plotting backend client and its task
//! - [`app`]     : the session state container (mutators, subscription,
//!   submission guard)
//!
//! Wiring follows one pattern: the app owns the form state and a sender for
//! outgoing payloads; a spawned network task executes each payload and sends
//! exactly one [`ResponseOutcome`](plot_core::ResponseOutcome) back, which
//! the caller feeds into [`app::App::handle_outcome`].

pub mod config;
pub mod network;
pub mod app;

pub use app::{App, SubmitError};
pub use config::Config;
pub use network::PlotBackend;
