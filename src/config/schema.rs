//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files; every
//! field has a default so a minimal (or missing) config file works.

use serde::{Deserialize, Serialize};

/// Root configuration for the registrar CLI.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RegistrarConfig {
    /// AWS account/region settings.
    pub aws: AwsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// AWS settings. Both fields are optional; when absent the SDK's own
/// resolution chain (environment, shared profile, IMDS) takes over.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AwsConfig {
    /// Region the client is bound to (e.g., "us-east-1").
    pub region: Option<String>,

    /// Named credentials profile.
    pub profile: Option<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Log output format: pretty for development, JSON for production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
