//! The scoring pass: weighted accumulation plus normalization.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::ScoringConfig;
use crate::models::{AttributionRequest, AttributionResult};

/// Tag identifying the rule set; echoed in every result.
pub const METHOD: &str = "rules:last-touch-decayed";

/// Stateless rule evaluator: holds only the read-only scoring configuration,
/// so one engine can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct AttributionEngine {
    config: ScoringConfig,
}

impl AttributionEngine {
    pub fn new(config: ScoringConfig) -> Self {
        AttributionEngine { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores one request: accumulates decayed base weights per channel
    /// across every user path, then normalizes so the credits sum to 1.
    ///
    /// Never fails. Unknown touchpoint types score at the default weight;
    /// an empty request yields an empty channel map.
    pub fn score(&self, request: &AttributionRequest) -> AttributionResult {
        // Fresh accumulator per call. BTreeMap keeps the summation and
        // output order stable, so identical input gives identical output.
        let mut channel_credit: BTreeMap<String, f64> = BTreeMap::new();
        let mut touchpoint_count = 0usize;

        for user_path in &request.user_paths {
            let steps = &user_path.path;
            for (idx, step) in steps.iter().enumerate() {
                let base = self.config.base_weight(&step.kind);
                // The last touchpoint (idx = len-1) gets exponent 0, full weight.
                let decay = self.config.decay_base.at_steps(steps.len() - 1 - idx);
                *channel_credit.entry(step.channel.clone()).or_insert(0.0) +=
                    base.value() * decay;
            }
            touchpoint_count += steps.len();
        }

        // Zero total only happens with zero touchpoints; divide by 1.0 so the
        // (empty) map passes through unchanged.
        let total: f64 = channel_credit.values().sum();
        let divisor = if total == 0.0 { 1.0 } else { total };

        let channels: BTreeMap<String, f64> = channel_credit
            .into_iter()
            .map(|(channel, credit)| (channel, credit / divisor))
            .collect();

        debug!(
            tenant_id = %request.tenant_id,
            paths = request.user_paths.len(),
            touchpoints = touchpoint_count,
            channels = channels.len(),
            "scored attribution request"
        );

        AttributionResult {
            tenant_id: request.tenant_id.clone(),
            channels,
            method: METHOD.to_string(),
        }
    }
}
