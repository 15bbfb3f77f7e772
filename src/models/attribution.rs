//! Wire-level data model for one attribution scoring call.
//!
//! These shapes are the JSON contract with the HTTP boundary: a request body
//! deserializes into [`AttributionRequest`], the engine's output serializes
//! from [`AttributionResult`]. Nothing here outlives a single call.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One recorded interaction between a user and a marketing channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Touchpoint {
    /// Channel identifier, e.g. "facebook".
    pub channel: String,

    /// Interaction category, e.g. "impression" / "click" / "whatsapp".
    /// Free-form; unknown values score at the configured default weight.
    #[serde(rename = "type")]
    pub kind: String,

    /// Unit-agnostic. Ordering context only, never used for arithmetic.
    pub timestamp: f64,
}

/// One user's journey: touchpoints in chronological order.
/// Position within `path` drives the decay, so order must be preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPath {
    pub path: Vec<Touchpoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributionRequest {
    /// Opaque tenant identifier, echoed back verbatim.
    pub tenant_id: String,
    pub user_paths: Vec<UserPath>,
}

impl AttributionRequest {
    /// Parses a request body, rejecting missing fields and wrong field types.
    /// This is the validation seam for the boundary layer; the engine itself
    /// assumes its input already passed here.
    pub fn from_json(body: &str) -> anyhow::Result<Self> {
        serde_json::from_str(body).context("invalid attribution request body")
    }
}

/// Normalized per-channel credit distribution for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributionResult {
    pub tenant_id: String,

    /// Channel -> credit share in [0,1]. Sums to 1.0 whenever the request
    /// contained at least one touchpoint; empty otherwise.
    pub channels: BTreeMap<String, f64>,

    /// Tag identifying the algorithm version that produced the scores.
    pub method: String,
}

impl AttributionResult {
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("failed to serialize attribution result")
    }
}
