//! plot-core
//!
//! Pure client-session logic for the stock plot viewer:
//! - form state (user input + UI phase)
//! - plot type / phase enums
//! - response outcomes (what the network layer reports back)
//! - the interpreter that maps outcomes onto form state

pub mod phase;
pub mod plot_type;
pub mod form;
pub mod outcome;
pub mod interpreter;

pub use phase::Phase;
pub use plot_type::PlotType;

pub use form::{FormState, DEFAULT_MA_PERIOD, MA_PERIOD_MAX, MA_PERIOD_MIN};

pub use outcome::{ResponseOutcome, DEFAULT_BACKEND_ERROR, TRANSPORT_ERROR_MESSAGE};

pub use interpreter::{apply_outcome, begin_loading};
