//! Form snapshot → request payload.
//!
//! This is the single validation gate before network activity: if any
//! required field is empty the submission is aborted here, no payload is
//! produced and the session never enters `Loading`.

use thiserror::Error;

use plot_core::FormState;

use crate::wire_types::RequestPayload;

/// A required field was empty at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("ticker symbol is required")]
    MissingTicker,

    #[error("start date is required")]
    MissingStartDate,

    #[error("end date is required")]
    MissingEndDate,
}

/// Build the wire payload from a form snapshot.
///
/// Pure mapping with one failure mode. Renames are explicit and fixed by
/// the backend contract: `showMA` ← show_moving_average, `maPeriod` ←
/// moving_average_period, `showVolume` ← show_volume. `maPeriod` is passed
/// through regardless of whether the overlay is enabled.
pub fn build_request(form: &FormState) -> Result<RequestPayload, ValidationError> {
    if form.ticker.is_empty() {
        return Err(ValidationError::MissingTicker);
    }
    if form.start_date.is_empty() {
        return Err(ValidationError::MissingStartDate);
    }
    if form.end_date.is_empty() {
        return Err(ValidationError::MissingEndDate);
    }

    Ok(RequestPayload {
        ticker: form.ticker.clone(),
        start_date: form.start_date.clone(),
        end_date: form.end_date.clone(),
        plot_type: form.plot_type.as_str().to_string(),
        show_ma: form.show_moving_average,
        show_volume: form.show_volume,
        ma_period: form.moving_average_period,
    })
}
