//! Batch processing over decoded request bundles.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use valmark_core::Date;
use valmark_curves::CurveSpec;
use valmark_swaps::{FixingSeries, SwapTradeSpec};

use crate::engine::SwapValuationEngine;
use crate::error::{PricingError, PricingResult};
use crate::result::MtmResult;

/// Batch-count logging threshold cap.
const MAX_LOG_THRESHOLD: u64 = 12_800;

/// One decoded valuation request.
///
/// Wire items are JSON objects with `calcdate`, `trade`, `curve`, and
/// `fixing` fields plus an optional `debug` peer tag. The upstream feed
/// emits each nested document as a JSON-encoded string; inline objects
/// are accepted too.
#[derive(Debug, Clone)]
pub struct RequestBundle {
    /// Valuation as-of date.
    pub calc_date: Date,
    /// Trade definition.
    pub trade: SwapTradeSpec,
    /// Discount curve specification.
    pub curve: CurveSpec,
    /// Historical fixings.
    pub fixing: FixingSeries,
    /// Optional peer identity tag, used only for diagnostics.
    pub debug: Option<String>,
}

impl RequestBundle {
    /// Decodes one wire item.
    pub fn decode(item: &str) -> PricingResult<Self> {
        let root: Value = serde_json::from_str(item).map_err(|e| PricingError::Decode {
            message: e.to_string(),
        })?;

        let calcdate: Value = nested_document(&root, "calcdate")?;
        let calc_date_str =
            calcdate
                .get("calc_date")
                .and_then(Value::as_str)
                .ok_or_else(|| PricingError::Decode {
                    message: "calcdate document missing calc_date".to_string(),
                })?;
        let calc_date = Date::parse(calc_date_str).map_err(|e| PricingError::Decode {
            message: e.to_string(),
        })?;

        let trade: SwapTradeSpec = decode_nested(&root, "trade")?;
        let curve: CurveSpec = decode_nested(&root, "curve")?;
        let fixing: FixingSeries = decode_nested(&root, "fixing")?;
        let debug = root
            .get("debug")
            .and_then(Value::as_str)
            .map(ToString::to_string);

        Ok(Self {
            calc_date,
            trade,
            curve,
            fixing,
            debug,
        })
    }
}

/// Reads a field holding either a JSON-encoded string or an inline
/// object, yielding the inner document.
fn nested_document(root: &Value, field: &str) -> PricingResult<Value> {
    match root.get(field) {
        Some(Value::String(inner)) => {
            serde_json::from_str(inner).map_err(|e| PricingError::Decode {
                message: format!("field {field:?}: {e}"),
            })
        }
        Some(value) => Ok(value.clone()),
        None => Err(PricingError::Decode {
            message: format!("missing field {field:?}"),
        }),
    }
}

/// Decodes a nested document field into a typed value.
fn decode_nested<T: DeserializeOwned>(root: &Value, field: &str) -> PricingResult<T> {
    let document = nested_document(root, field)?;
    serde_json::from_value(document).map_err(|e| PricingError::Decode {
        message: format!("field {field:?}: {e}"),
    })
}

/// Per-connection diagnostic state.
///
/// Tracks which upstream peer last sent data and how often that identity
/// changed, plus the batch counter driving progress logging. Scoped to
/// one connection, never shared across streams.
#[derive(Debug, Default)]
pub struct ConnectionContext {
    /// Last observed peer identity from the `debug` field.
    peer: Option<String>,
    /// Number of times the peer identity changed.
    peer_changes: u64,
    /// Batches processed on this connection.
    batches: u64,
    /// Current progress logging threshold.
    log_threshold: u64,
}

impl ConnectionContext {
    /// Creates a fresh per-connection context.
    pub fn new() -> Self {
        Self {
            peer: None,
            peer_changes: 0,
            batches: 0,
            log_threshold: 100,
        }
    }

    /// Returns the last observed peer identity.
    pub fn peer(&self) -> Option<&str> {
        self.peer.as_deref()
    }

    /// Returns how many times the peer identity changed.
    pub fn peer_changes(&self) -> u64 {
        self.peer_changes
    }

    /// Returns the number of batches processed.
    pub fn batches(&self) -> u64 {
        self.batches
    }

    /// Records the peer identity attached to a request item.
    fn observe_peer(&mut self, peer: Option<&str>) {
        let Some(peer) = peer else { return };
        match self.peer.as_deref() {
            None => self.peer = Some(peer.to_string()),
            Some(previous) if previous != peer => {
                self.peer = Some(peer.to_string());
                self.peer_changes += 1;
            }
            Some(_) => {}
        }
    }

    /// Counts a processed batch, logging progress at a doubling
    /// threshold (batch 0, 200, 400, 800, ... then every 12,800).
    fn record_batch(&mut self, batch_size: usize) {
        if self.batches % self.log_threshold == 0 {
            info!(
                batches = self.batches,
                batch_size,
                peer = self.peer.as_deref().unwrap_or(""),
                peer_changes = self.peer_changes,
                "stream progress"
            );
            if self.log_threshold < MAX_LOG_THRESHOLD {
                self.log_threshold += self.log_threshold;
            }
        }
        self.batches += 1;
    }
}

/// Applies the valuation engine across inbound batches.
///
/// Guarantees, per batch: the outbound item count equals the inbound
/// count, item order is preserved, and a malformed or failed item is
/// reported in place as a failed result. Items are processed strictly
/// serially in arrival order; there is no retry.
#[derive(Debug, Default)]
pub struct BatchValuationService {
    engine: SwapValuationEngine,
}

impl BatchValuationService {
    /// Creates a batch service with a fresh engine.
    pub fn new() -> Self {
        Self {
            engine: SwapValuationEngine::new(),
        }
    }

    /// Processes one inbound batch into one outbound batch of serialized
    /// results.
    pub fn process_batch(
        &self,
        context: &mut ConnectionContext,
        items: &[String],
    ) -> Vec<String> {
        let out = items
            .iter()
            .map(|item| serialize_result(&self.process_item(context, item)))
            .collect();
        context.record_batch(items.len());
        out
    }

    /// Processes a single item: decode, value, and convert any failure
    /// into a failed result in place.
    pub fn process_item(&self, context: &mut ConnectionContext, item: &str) -> MtmResult {
        match RequestBundle::decode(item) {
            Ok(bundle) => {
                context.observe_peer(bundle.debug.as_deref());
                self.engine
                    .value(&bundle.curve, &bundle.fixing, &bundle.trade, bundle.calc_date)
            }
            Err(error) => {
                warn!(%error, "discarding malformed request item");
                MtmResult::failed("", "", error.to_string())
            }
        }
    }
}

/// Serializes a result to its wire form.
///
/// Serialization of an `MtmResult` only fails on non-finite floats; in
/// that case the item degrades to a failed result rather than breaking
/// the batch cardinality.
fn serialize_result(result: &MtmResult) -> String {
    match serde_json::to_string(result) {
        Ok(json) => json,
        Err(error) => {
            warn!(%error, tradeid = %result.tradeid, "result serialization failed");
            let fallback = MtmResult::failed(
                &result.tradeid,
                &result.curvename,
                format!("result serialization failed: {error}"),
            );
            serde_json::to_string(&fallback).unwrap_or_else(|_| {
                "{\"haserrored\":true,\"error\":\"serialization failed\"}".to_string()
            })
        }
    }
}
