//! UI phase for the plot session.

/// Which of the four visible states the session is in.
///
/// The phase gates what the presentation layer reads from
/// [`FormState`](crate::FormState):
/// - `Success` means `plot_image_data` is set and `error_message` is empty.
/// - `Error` means `error_message` is set.
/// - `Idle` / `Loading` may carry stale data from a previous cycle; it is
///   not read for rendering until the phase leaves `Loading`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a submission. Initial state.
    Idle,

    /// A validated submission is in flight.
    Loading,

    /// The backend returned a plot image.
    Success,

    /// The backend rejected the request, or it never completed.
    Error,
}

impl Phase {
    /// True while a submission is in flight; the UI disables the submit
    /// affordance in this phase.
    pub fn is_busy(self) -> bool {
        self == Phase::Loading
    }
}
