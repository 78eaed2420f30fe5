//! Wire types and endpoint constants.
//!
//! The backend mounts the application under an `/D8TAVu` prefix; both paths
//! below include it. The JSON field names (`showMA`, `maPeriod`, ...) are
//! part of the backend contract and must not change.

use serde::{Deserialize, Serialize};

/// Plot endpoint. One POST per submission.
pub const STOCK_DATA_PATH: &str = "/D8TAVu/stock-data";

/// Readiness probe exposed by the backend.
pub const HEALTH_PATH: &str = "/D8TAVu/health";

/// Request body for `POST /D8TAVu/stock-data`.
///
/// `ma_period` is always sent, whether or not the moving-average overlay is
/// enabled; its effect is backend-determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPayload {
    pub ticker: String,

    /// `YYYY-MM-DD`.
    #[serde(rename = "startDate")]
    pub start_date: String,

    /// `YYYY-MM-DD`.
    #[serde(rename = "endDate")]
    pub end_date: String,

    /// `"line"`, `"candlestick"` or `"ohlc"`.
    #[serde(rename = "plotType")]
    pub plot_type: String,

    #[serde(rename = "showMA")]
    pub show_ma: bool,

    #[serde(rename = "showVolume")]
    pub show_volume: bool,

    #[serde(rename = "maPeriod")]
    pub ma_period: u32,
}

/// Success response body: base64-encoded PNG bytes, no data-URI prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotBody {
    pub plot: String,
}

/// Failure response body. The message is optional on the wire; absence is
/// mapped to a generic default on the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
