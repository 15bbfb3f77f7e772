//! Scoring constants and newtype wrappers (Immutable Blueprints)

use serde::{Deserialize, Serialize};

/// A base credit weight clamped between 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub(crate) const DEFAULT_VALUE: f64 = 0.3;
    pub(crate) const DEFAULT: Self = Self(Self::DEFAULT_VALUE);

    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 {
            0.0
        } else if val > 1.0 {
            1.0
        } else {
            val
        };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Geometric decay factor applied per position step away from the end of a path.
/// Clamped between 0 and 1. 1.0 disables decay; 0.0 collapses to pure last-touch.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecayBase(f64);

impl DecayBase {
    pub(crate) const DEFAULT_VALUE: f64 = 0.85;
    pub(crate) const DEFAULT: Self = Self(Self::DEFAULT_VALUE);

    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 {
            0.0
        } else if val > 1.0 {
            1.0
        } else {
            val
        };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Decay multiplier for a touchpoint `steps` positions before the end of its path.
    #[inline]
    pub(crate) fn at_steps(self, steps: usize) -> f64 {
        self.0.powi(steps as i32)
    }
}

impl Default for DecayBase {
    fn default() -> Self {
        Self::DEFAULT
    }
}
