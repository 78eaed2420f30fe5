// crates/plot-client/src/network.rs

use std::time::Duration;

use reqwest::{header, Client};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use plot_core::ResponseOutcome;
use plot_protocol::{
    decode_error_body, decode_plot_body, encode_request, RequestPayload, STOCK_DATA_PATH,
};

/// HTTP client for the plotting backend.
///
/// One [`fetch_plot`](Self::fetch_plot) call is one POST and exactly one
/// [`ResponseOutcome`]; there are no retries and no cancellation. Overlap
/// policy (reject while loading) is enforced by the session, not here.
pub struct PlotBackend {
    client: Client,
    base_url: String,
}

impl PlotBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the plot endpoint.
    pub fn stock_data_url(&self) -> String {
        format!("{}{}", self.base_url, STOCK_DATA_PATH)
    }

    /// Issue a single plot request and classify the result.
    ///
    /// - success status + decodable body → `Success(plot_base64)`
    /// - failure status → `Failure(message)`, with the backend's message or
    ///   the generic default when the body carries none
    /// - anything that prevents a verdict (connect error, timeout, success
    ///   status with an unreadable or non-JSON body) → `TransportError`
    pub async fn fetch_plot(&self, payload: &RequestPayload) -> ResponseOutcome {
        let body = match encode_request(payload) {
            Ok(body) => body,
            Err(e) => {
                warn!("failed to encode request body: {e}");
                return ResponseOutcome::TransportError;
            }
        };

        debug!(url = %self.stock_data_url(), ticker = %payload.ticker, "sending plot request");

        let response = match self
            .client
            .post(self.stock_data_url())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("plot request did not complete: {e}");
                return ResponseOutcome::TransportError;
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!(%status, "failed to read response body: {e}");
                return ResponseOutcome::TransportError;
            }
        };

        if status.is_success() {
            match decode_plot_body(&text) {
                Ok(plot) => {
                    info!(%status, bytes = plot.len(), "plot received");
                    ResponseOutcome::Success(plot)
                }
                Err(e) => {
                    warn!(%status, "success status with undecodable body: {e}");
                    ResponseOutcome::TransportError
                }
            }
        } else {
            let message = decode_error_body(&text);
            info!(%status, %message, "backend rejected the request");
            ResponseOutcome::Failure(message)
        }
    }

    /// Network task: execute each queued payload and report the outcome
    /// back to the session. Runs until the request channel closes.
    pub async fn run(
        self,
        mut rx: UnboundedReceiver<RequestPayload>,
        tx: UnboundedSender<ResponseOutcome>,
    ) {
        while let Some(payload) = rx.recv().await {
            let outcome = self.fetch_plot(&payload).await;
            if tx.send(outcome).is_err() {
                debug!("session side closed; stopping network task");
                break;
            }
        }
    }
}
