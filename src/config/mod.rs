//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RegistrarConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; read once at startup, no hot reload
//! - All fields have defaults to allow minimal configs
//! - CLI flags override file values; the environment fills what is left

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AwsConfig, LogFormat, ObservabilityConfig, RegistrarConfig};
