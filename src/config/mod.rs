//! Configuration module for the attribution engine.

// Can all be private because we have public re-exports.
mod scoring;
mod types;

// Re-export commonly used items
pub use scoring::{DECAY_BASE, DEFAULT_WEIGHT, ScoringConfig, TYPE_WEIGHTS};
pub use types::{DecayBase, Weight};
