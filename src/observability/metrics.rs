//! Metrics collection.
//!
//! # Metrics
//! - `elb_api_calls_total` (counter): control-plane calls by operation and
//!   outcome
//!
//! # Design Decisions
//! - Low-overhead counter increments through the `metrics` facade
//! - No recorder is installed here; without one, increments are no-ops

/// Record one control-plane call and whether it succeeded.
pub fn record_api_call(operation: &'static str, success: bool) {
    let outcome = if success { "ok" } else { "error" };
    metrics::counter!("elb_api_calls_total", "operation" => operation, "outcome" => outcome)
        .increment(1);
}
