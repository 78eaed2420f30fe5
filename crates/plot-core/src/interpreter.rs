//! Folds network outcomes into the form state.
//!
//! The phase machine:
//!
//! ```text
//!   Idle | Error | Success --(valid submission)--> Loading
//!   Loading --(Success outcome)--> Success
//!   Loading --(Failure | TransportError)--> Error
//! ```
//!
//! There is no automatic return to Idle; the next visible state is always
//! driven by the next submission's outcome.

use crate::form::FormState;
use crate::outcome::{ResponseOutcome, TRANSPORT_ERROR_MESSAGE};
use crate::phase::Phase;

/// Enter `Loading`. Called synchronously once a submission has passed
/// validation, before any network activity.
///
/// Clears the error banner for the new cycle; the previous plot image is
/// kept so the display does not flash empty while the request is in flight.
pub fn begin_loading(form: &mut FormState) {
    form.phase = Phase::Loading;
    form.error_message = None;
}

/// Apply the outcome of a network attempt.
///
/// On `Success` the image source becomes a fully qualified
/// `data:image/png;base64,...` URI and the error banner is cleared. On
/// either failure kind the error banner is set and the previous plot image
/// is **retained**: a prior successful plot stays displayable under the
/// error banner. See DESIGN.md for why the retention is deliberate.
pub fn apply_outcome(form: &mut FormState, outcome: ResponseOutcome) {
    match outcome {
        ResponseOutcome::Success(plot_base64) => {
            form.plot_image_data = Some(format!("data:image/png;base64,{plot_base64}"));
            form.error_message = None;
            form.phase = Phase::Success;
        }
        ResponseOutcome::Failure(message) => {
            form.error_message = Some(message);
            form.phase = Phase::Error;
        }
        ResponseOutcome::TransportError => {
            form.error_message = Some(TRANSPORT_ERROR_MESSAGE.to_string());
            form.phase = Phase::Error;
        }
    }
}
