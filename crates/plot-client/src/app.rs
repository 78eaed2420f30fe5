// crates/plot-client/src/app.rs

use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::watch;
use tracing::{debug, info};

use plot_core::{apply_outcome, begin_loading, FormState, PlotType, ResponseOutcome};
use plot_protocol::{build_request, RequestPayload, ValidationError};

/// Why a submission was refused before any network activity.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// A required field was empty; surfaced locally, the backend is never
    /// contacted and the phase does not change.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A submission is already in flight. New submissions are rejected
    /// rather than raced; whoever rendered the form should have the submit
    /// affordance disabled while loading anyway.
    #[error("a submission is already in flight")]
    Busy,

    /// No network task is attached yet.
    #[error("not connected to a plotting backend")]
    NotConnected,
}

/// The session state container.
///
/// Owns the one [`FormState`] record for the session. Mutations go through
/// the discrete operations below; after every mutation a fresh snapshot is
/// published on a watch channel so any presentation layer can re-render
/// without being coupled to a rendering technology.
pub struct App {
    form: FormState,
    watch_tx: watch::Sender<FormState>,
    network_tx: Option<UnboundedSender<RequestPayload>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let form = FormState::new();
        let (watch_tx, _) = watch::channel(form.clone());
        Self {
            form,
            watch_tx,
            network_tx: None,
        }
    }

    /// Subscribe to form snapshots. Every discrete mutation publishes one.
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.watch_tx.subscribe()
    }

    pub fn set_network_sender(&mut self, tx: UnboundedSender<RequestPayload>) {
        self.network_tx = Some(tx);
    }

    /// Read access to the current state.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    // Field mutators: each touches one field, then publishes.

    pub fn set_ticker(&mut self, ticker: &str) {
        self.form.set_ticker(ticker);
        self.publish();
    }

    pub fn set_start_date(&mut self, date: &str) {
        self.form.set_start_date(date);
        self.publish();
    }

    pub fn set_end_date(&mut self, date: &str) {
        self.form.set_end_date(date);
        self.publish();
    }

    pub fn set_plot_type(&mut self, plot_type: PlotType) {
        self.form.set_plot_type(plot_type);
        self.publish();
    }

    pub fn set_show_moving_average(&mut self, show: bool) {
        self.form.set_show_moving_average(show);
        self.publish();
    }

    pub fn set_moving_average_period(&mut self, input: &str) {
        self.form.set_moving_average_period(input);
        self.publish();
    }

    pub fn set_show_volume(&mut self, show: bool) {
        self.form.set_show_volume(show);
        self.publish();
    }

    /// Submit the current form.
    ///
    /// Validates, enters `Loading` synchronously, and hands the payload to
    /// the network task. On any [`SubmitError`] nothing is sent and the
    /// phase is left untouched. Exactly one outcome per accepted submission
    /// later arrives at [`handle_outcome`](Self::handle_outcome).
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        if self.form.phase.is_busy() {
            debug!("submission rejected: already loading");
            return Err(SubmitError::Busy);
        }
        let tx = self.network_tx.as_ref().ok_or(SubmitError::NotConnected)?;
        let payload = build_request(&self.form)?;

        begin_loading(&mut self.form);
        info!(ticker = %payload.ticker, "submission accepted");
        let _ = tx.send(payload);
        self.publish();
        Ok(())
    }

    /// Feed a network outcome back into the state machine.
    pub fn handle_outcome(&mut self, outcome: ResponseOutcome) {
        apply_outcome(&mut self.form, outcome);
        info!(phase = ?self.form.phase, "outcome applied");
        self.publish();
    }

    fn publish(&self) {
        // Receivers may come and go; publishing to none is fine.
        let _ = self.watch_tx.send(self.form.snapshot());
    }
}
