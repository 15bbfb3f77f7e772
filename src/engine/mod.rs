mod scoring;

pub use scoring::{AttributionEngine, METHOD};
