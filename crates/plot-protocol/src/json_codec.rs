//! JSON encode/decode for the wire types.
//!
//! Request side: [`encode_request`] produces the exact body for
//! `POST /D8TAVu/stock-data` (`Content-Type: application/json`).
//!
//! Response side:
//! - success body `{"plot": <base64>}` → [`decode_plot_body`]
//! - failure body `{"error": <msg>}`   → [`decode_error_body`], which
//!   substitutes [`DEFAULT_BACKEND_ERROR`](plot_core::DEFAULT_BACKEND_ERROR)
//!   when the field is missing or the body is not decodable.

use thiserror::Error;

use plot_core::DEFAULT_BACKEND_ERROR;

use crate::wire_types::{ErrorBody, PlotBody, RequestPayload};

/// Encode or decode failed at the JSON layer.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Serialize the payload to the JSON body the backend expects.
pub fn encode_request(payload: &RequestPayload) -> Result<String, CodecError> {
    serde_json::to_string(payload).map_err(CodecError::Encode)
}

/// Extract the base64 plot string from a success body.
///
/// A success status with an undecodable body is a transport-level problem;
/// the caller maps the returned error accordingly.
pub fn decode_plot_body(body: &str) -> Result<String, CodecError> {
    let parsed: PlotBody = serde_json::from_str(body).map_err(CodecError::Decode)?;
    Ok(parsed.plot)
}

/// Extract the error message from a failure body, falling back to the
/// generic default when no message is present.
///
/// This is deliberately infallible: a backend that reports a failure status
/// always yields a displayable message.
pub fn decode_error_body(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .unwrap_or_else(|| DEFAULT_BACKEND_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::build_request;
    use plot_core::{FormState, PlotType};

    #[test]
    fn encoded_request_uses_the_contract_field_names() {
        let payload = RequestPayload {
            ticker: "AAPL".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-06-30".to_string(),
            plot_type: "ohlc".to_string(),
            show_ma: true,
            show_volume: false,
            ma_period: 20,
        };
        let body = encode_request(&payload).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["ticker"], "AAPL");
        assert_eq!(value["startDate"], "2024-01-01");
        assert_eq!(value["endDate"], "2024-06-30");
        assert_eq!(value["plotType"], "ohlc");
        assert_eq!(value["showMA"], true);
        assert_eq!(value["showVolume"], false);
        assert_eq!(value["maPeriod"], 20);
    }

    #[test]
    fn built_request_round_trips_through_the_wire_schema() {
        let mut form = FormState::new();
        form.set_ticker("tsla");
        form.set_start_date("2023-01-01");
        form.set_end_date("2023-12-31");
        form.set_plot_type(PlotType::Candlestick);
        form.set_moving_average_period("7");

        let payload = build_request(&form).unwrap();
        let body = encode_request(&payload).unwrap();
        let back: RequestPayload = serde_json::from_str(&body).unwrap();
        assert_eq!(back, payload);
        assert_eq!(back.ticker, "TSLA");
        assert_eq!(back.ma_period, 7);
    }

    #[test]
    fn plot_body_decodes() {
        assert_eq!(decode_plot_body(r#"{"plot":"AAAA"}"#).unwrap(), "AAAA");
    }

    #[test]
    fn plot_body_rejects_garbage() {
        assert!(matches!(
            decode_plot_body("<html>nope</html>"),
            Err(CodecError::Decode(_))
        ));
    }

    #[test]
    fn error_body_with_message() {
        assert_eq!(decode_error_body(r#"{"error":"bad ticker"}"#), "bad ticker");
    }

    #[test]
    fn error_body_without_message_falls_back() {
        assert_eq!(decode_error_body("{}"), DEFAULT_BACKEND_ERROR);
        assert_eq!(decode_error_body(""), DEFAULT_BACKEND_ERROR);
        assert_eq!(decode_error_body("oops"), DEFAULT_BACKEND_ERROR);
    }
}
