//! Mock plotting backend.
//!
//! Serves the same routes as the real backend (an app mounted under the
//! `/D8TAVu` prefix) with the same status codes and error strings, minus the
//! actual plotting: every successful request returns the same canned 1x1 PNG.
//!
//! Two fault-injection tickers exist for exercising client error paths:
//! - [`FAULT_EMPTY_BODY`]: failure status with a JSON body carrying no
//!   `error` field.
//! - [`FAULT_GARBAGE_BODY`]: success status with a body that is not JSON.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{debug, info};

/// Base64 of a 1x1 transparent PNG: the canned "plot" for every success.
pub const PLOT_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// Tickers the mock has "data" for; anything else is a 404.
pub const KNOWN_TICKERS: &[&str] = &["AAPL", "MSFT", "GOOG", "IBM", "TSLA"];

/// Ticker that triggers a 500 with an empty JSON body (no `error` field).
pub const FAULT_EMPTY_BODY: &str = "FAULTEMPTY";

/// Ticker that triggers a 200 with a non-JSON body.
pub const FAULT_GARBAGE_BODY: &str = "FAULTGARBAGE";

/// Only the fields the mock acts on; plot options are accepted and ignored.
#[derive(Debug, Deserialize)]
struct StockRequest {
    ticker: Option<String>,
    #[serde(rename = "startDate")]
    start_date: Option<String>,
    #[serde(rename = "endDate")]
    end_date: Option<String>,
}

pub fn app() -> Router {
    Router::new()
        .route("/D8TAVu/stock-data", post(stock_data))
        .route("/D8TAVu/health", get(health))
        .route("/health", get(health))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "healthy"}))
}

async fn stock_data(Json(req): Json<StockRequest>) -> Response {
    debug!(?req, "stock-data request");

    let (ticker, start_date, end_date) = match (&req.ticker, &req.start_date, &req.end_date) {
        (Some(t), Some(s), Some(e)) if !t.is_empty() && !s.is_empty() && !e.is_empty() => {
            (t.clone(), s.clone(), e.clone())
        }
        _ => {
            return error_response(StatusCode::BAD_REQUEST, "Missing required parameters");
        }
    };

    match ticker.as_str() {
        FAULT_EMPTY_BODY => {
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))).into_response();
        }
        FAULT_GARBAGE_BODY => {
            return (StatusCode::OK, "<html>definitely not json</html>").into_response();
        }
        _ => {}
    }

    if parse_date(&start_date).is_none() || parse_date(&end_date).is_none() {
        return error_response(StatusCode::BAD_REQUEST, "Invalid date format. Use YYYY-MM-DD");
    }

    if !KNOWN_TICKERS.contains(&ticker.as_str()) {
        return error_response(
            StatusCode::NOT_FOUND,
            &format!("No data found for ticker {ticker}"),
        );
    }

    info!(%ticker, %start_date, %end_date, "serving canned plot");
    (StatusCode::OK, Json(json!({"plot": PLOT_PNG_BASE64}))).into_response()
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"error": message}))).into_response()
}
