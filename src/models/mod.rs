mod attribution;

pub use attribution::{AttributionRequest, AttributionResult, Touchpoint, UserPath};
