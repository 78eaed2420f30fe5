//! plot-protocol
//!
//! Wire-level contract with the plotting backend.
//!
//! This crate is responsible for turning a validated form snapshot into the
//! exact JSON the backend expects, and for decoding the backend's response
//! bodies. Field names are fixed by the backend and reproduced bit-for-bit.
//!
//! - [`wire_types`] : payload / response body structs and endpoint paths
//! - [`request`]    : form snapshot → payload (the one validation gate)
//! - [`json_codec`] : JSON encode/decode on top of the wire types

pub mod wire_types;
pub mod request;
pub mod json_codec;

pub use wire_types::{RequestPayload, ErrorBody, PlotBody, HEALTH_PATH, STOCK_DATA_PATH};

pub use request::{build_request, ValidationError};

pub use json_codec::{
    CodecError,
    decode_error_body,
    decode_plot_body,
    encode_request,
};
