//! Scoring configuration: the type-weight table and decay factor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{DecayBase, Weight};

// Base weights for the touchpoint types the rule set knows about.
// Anything not listed here falls back to DEFAULT_WEIGHT.
pub const TYPE_WEIGHTS: &[(&str, Weight)] = &[
    ("impression", Weight::new(0.2)),
    ("click", Weight::new(0.6)),
    ("whatsapp", Weight::new(0.8)),
];

pub const DEFAULT_WEIGHT: Weight = Weight::DEFAULT;
pub const DECAY_BASE: DecayBase = DecayBase::DEFAULT;

/// The overridable scoring configuration.
/// Built once at startup and handed to the engine; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Base weight per known touchpoint type.
    pub type_weights: BTreeMap<String, Weight>,

    /// Fallback weight for touchpoint types absent from `type_weights`.
    pub default_weight: Weight,

    /// Geometric decay per position step away from the end of a path.
    pub decay_base: DecayBase,
}

impl ScoringConfig {
    /// Base weight for a touchpoint type, falling back to `default_weight`
    /// for unknown types. Unknown types are never an error.
    #[inline]
    pub(crate) fn base_weight(&self, kind: &str) -> Weight {
        self.type_weights
            .get(kind)
            .copied()
            .unwrap_or(self.default_weight)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let type_weights = TYPE_WEIGHTS
            .iter()
            .map(|&(kind, weight)| (kind.to_string(), weight))
            .collect();

        ScoringConfig {
            type_weights,
            default_weight: DEFAULT_WEIGHT,
            decay_base: DECAY_BASE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_matches_rule_set() {
        let config = ScoringConfig::default();
        assert_eq!(config.base_weight("impression").value(), 0.2);
        assert_eq!(config.base_weight("click").value(), 0.6);
        assert_eq!(config.base_weight("whatsapp").value(), 0.8);
        assert_eq!(config.decay_base.value(), 0.85);
    }

    #[test]
    fn unknown_type_falls_back_to_default_weight() {
        let config = ScoringConfig::default();
        assert_eq!(config.base_weight("tiktok").value(), 0.3);
        assert_eq!(config.base_weight("").value(), 0.3);
    }

    #[test]
    fn config_round_trips_through_json_for_overrides() {
        let mut config = ScoringConfig::default();
        config
            .type_weights
            .insert("email".to_string(), Weight::new(0.4));

        let json = serde_json::to_string(&config).unwrap();
        let restored: ScoringConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
        assert_eq!(restored.base_weight("email").value(), 0.4);
    }
}
