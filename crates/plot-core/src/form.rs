//! The single mutable form record for a plot session.
//!
//! One `FormState` lives for the whole session. User input handlers mutate
//! it through the field setters below; the [`interpreter`](crate::interpreter)
//! mutates it when a network outcome arrives. Each setter touches exactly
//! one field and leaves the rest alone.

use crate::phase::Phase;
use crate::plot_type::PlotType;

/// Default moving-average window, in trading periods.
pub const DEFAULT_MA_PERIOD: u32 = 20;

/// Smallest accepted moving-average window.
pub const MA_PERIOD_MIN: u32 = 1;

/// Largest accepted moving-average window.
pub const MA_PERIOD_MAX: u32 = 200;

/// Current user input plus the derived UI phase.
///
/// Invariants:
/// - `plot_image_data` and `error_message` are never both set once the
///   phase reaches `Success` or `Error`.
/// - `moving_average_period` is retained when `show_moving_average` is
///   toggled off, so re-enabling the overlay restores the last value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub ticker: String,
    pub start_date: String,
    pub end_date: String,
    pub plot_type: PlotType,
    pub show_moving_average: bool,
    pub moving_average_period: u32,
    pub show_volume: bool,
    pub phase: Phase,

    /// Fully qualified `data:image/png;base64,...` URI, ready to use as an
    /// image source. Set on success.
    pub plot_image_data: Option<String>,

    /// Message shown in the error banner. Set on failure.
    pub error_message: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            ticker: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            plot_type: PlotType::Line,
            show_moving_average: false,
            moving_average_period: DEFAULT_MA_PERIOD,
            show_volume: false,
            phase: Phase::Idle,
            plot_image_data: None,
            error_message: None,
        }
    }

    /// Store the ticker, canonicalized to uppercase at the point of entry.
    pub fn set_ticker(&mut self, ticker: &str) {
        self.ticker = ticker.to_uppercase();
    }

    pub fn set_start_date(&mut self, date: &str) {
        self.start_date = date.to_string();
    }

    pub fn set_end_date(&mut self, date: &str) {
        self.end_date = date.to_string();
    }

    pub fn set_plot_type(&mut self, plot_type: PlotType) {
        self.plot_type = plot_type;
    }

    /// Toggle the moving-average overlay. The period is deliberately left
    /// untouched so re-enabling restores the last value.
    pub fn set_show_moving_average(&mut self, show: bool) {
        self.show_moving_average = show;
    }

    /// Coerce textual period input to an integer in
    /// `MA_PERIOD_MIN..=MA_PERIOD_MAX`. Non-numeric or out-of-range input
    /// is rejected by leaving the prior valid value in place.
    pub fn set_moving_average_period(&mut self, input: &str) {
        if let Ok(period) = input.trim().parse::<u32>() {
            if (MA_PERIOD_MIN..=MA_PERIOD_MAX).contains(&period) {
                self.moving_average_period = period;
            }
        }
    }

    pub fn set_show_volume(&mut self, show: bool) {
        self.show_volume = show;
    }

    /// Full snapshot for the presentation layer.
    pub fn snapshot(&self) -> FormState {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_session() {
        let form = FormState::new();
        assert_eq!(form.ticker, "");
        assert_eq!(form.plot_type, PlotType::Line);
        assert_eq!(form.moving_average_period, DEFAULT_MA_PERIOD);
        assert!(!form.show_moving_average);
        assert!(!form.show_volume);
        assert_eq!(form.phase, Phase::Idle);
        assert!(form.plot_image_data.is_none());
        assert!(form.error_message.is_none());
    }

    #[test]
    fn ticker_is_uppercased_on_entry() {
        let mut form = FormState::new();
        form.set_ticker("aapl");
        assert_eq!(form.ticker, "AAPL");
    }

    #[test]
    fn ma_period_rejects_non_numeric_input() {
        let mut form = FormState::new();
        form.set_moving_average_period("50");
        form.set_moving_average_period("abc");
        assert_eq!(form.moving_average_period, 50);
    }

    #[test]
    fn ma_period_rejects_out_of_range_input() {
        let mut form = FormState::new();
        form.set_moving_average_period("0");
        form.set_moving_average_period("201");
        assert_eq!(form.moving_average_period, DEFAULT_MA_PERIOD);
    }

    #[test]
    fn ma_period_survives_toggle_off() {
        let mut form = FormState::new();
        form.set_show_moving_average(true);
        form.set_moving_average_period("100");
        form.set_show_moving_average(false);
        assert_eq!(form.moving_average_period, 100);
        form.set_show_moving_average(true);
        assert_eq!(form.moving_average_period, 100);
    }

    #[test]
    fn setters_touch_exactly_one_field() {
        let mut form = FormState::new();
        form.set_ticker("ibm");
        let before = form.snapshot();
        form.set_start_date("2024-01-01");
        assert_eq!(form.start_date, "2024-01-01");
        assert_eq!(form.ticker, before.ticker);
        assert_eq!(form.plot_type, before.plot_type);
        assert_eq!(form.phase, before.phase);
    }
}
