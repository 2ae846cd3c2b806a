//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value shapes (known log level, non-empty region/profile)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RegistrarConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::RegistrarConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyRegion,
    EmptyProfile,
    UnknownLogLevel(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyRegion => write!(f, "aws.region must not be empty when set"),
            ValidationError::EmptyProfile => write!(f, "aws.profile must not be empty when set"),
            ValidationError::UnknownLogLevel(level) => {
                write!(
                    f,
                    "observability.log_level '{}' is not one of {}",
                    level,
                    LOG_LEVELS.join(", ")
                )
            }
        }
    }
}

/// Validate a parsed configuration, collecting every failure.
pub fn validate_config(config: &RegistrarConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if matches!(&config.aws.region, Some(r) if r.trim().is_empty()) {
        errors.push(ValidationError::EmptyRegion);
    }
    if matches!(&config.aws.profile, Some(p) if p.trim().is_empty()) {
        errors.push(ValidationError::EmptyProfile);
    }

    let level = config.observability.log_level.as_str();
    if !LOG_LEVELS.contains(&level) {
        errors.push(ValidationError::UnknownLogLevel(level.to_string()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
