//! Rule-based marketing attribution: turns per-tenant collections of user
//! journeys into a normalized per-channel credit distribution, using a
//! last-touch-biased geometric decay over touchpoint positions.
//!
//! The crate is a pure library. HTTP plumbing, CORS, and trend scraping live
//! with the embedding service; this crate owns the wire-shaped data model,
//! the weight configuration, and the scoring pass itself.

// Core modules
pub mod config;
pub mod engine;
pub mod models;

// Re-export commonly used types outside of crate
pub use config::ScoringConfig;
pub use engine::AttributionEngine;
pub use models::{AttributionRequest, AttributionResult, Touchpoint, UserPath};
