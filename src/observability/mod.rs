//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! client operations produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (per-operation counters)
//!
//! Consumers:
//!     → Log aggregation (stdout, pretty or JSON)
//!     → Whatever metrics recorder the embedding process installs
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; format chosen by config
//! - Counters go through the `metrics` facade; this crate installs no
//!   recorder or exporter of its own

pub mod logging;
pub mod metrics;
