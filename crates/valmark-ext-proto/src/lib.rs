//! # Valmark Ext Proto
//!
//! Proto3 binary encodings of the Valmark wire types, used for
//! file-based interchange by external tooling.
//!
//! Each message mirrors its JSON counterpart field-for-field with stable
//! field numbers; the in-memory model converts losslessly in both
//! directions.
//!
//! ```rust
//! use valmark_engine::MtmResult;
//! use valmark_ext_proto::{decode_mtm, encode_mtm};
//!
//! let mtm = MtmResult::new("SWP-00001", "USD-3M");
//! let bytes = encode_mtm(&mtm);
//! assert_eq!(decode_mtm(&bytes).unwrap(), mtm);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod messages;

pub use messages::{Curve, Fixing, Mtm, SwapTrade};

use prost::Message;

use valmark_curves::CurveSpec;
use valmark_engine::MtmResult;
use valmark_swaps::{FixingSeries, SwapTradeSpec};

/// Encodes a curve specification to its binary form.
pub fn encode_curve(spec: &CurveSpec) -> Vec<u8> {
    Curve::from(spec).encode_to_vec()
}

/// Decodes a curve specification from its binary form.
pub fn decode_curve(bytes: &[u8]) -> Result<CurveSpec, prost::DecodeError> {
    Curve::decode(bytes).map(Into::into)
}

/// Encodes a fixing series to its binary form.
pub fn encode_fixing(series: &FixingSeries) -> Vec<u8> {
    Fixing::from(series).encode_to_vec()
}

/// Decodes a fixing series from its binary form.
pub fn decode_fixing(bytes: &[u8]) -> Result<FixingSeries, prost::DecodeError> {
    Fixing::decode(bytes).map(Into::into)
}

/// Encodes a swap trade to its binary form.
pub fn encode_trade(trade: &SwapTradeSpec) -> Vec<u8> {
    SwapTrade::from(trade).encode_to_vec()
}

/// Decodes a swap trade from its binary form.
pub fn decode_trade(bytes: &[u8]) -> Result<SwapTradeSpec, prost::DecodeError> {
    SwapTrade::decode(bytes).map(Into::into)
}

/// Encodes a valuation result to its binary form.
pub fn encode_mtm(result: &MtmResult) -> Vec<u8> {
    Mtm::from(result).encode_to_vec()
}

/// Decodes a valuation result from its binary form.
pub fn decode_mtm(bytes: &[u8]) -> Result<MtmResult, prost::DecodeError> {
    Mtm::decode(bytes).map(Into::into)
}
