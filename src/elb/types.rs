//! ELB-specific types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// EC2 instance identifier (e.g., "i-16137da5").
///
/// Opaque to this library: supplied by the caller and forwarded to the
/// control plane without validation beyond presence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(String);

impl InstanceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InstanceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for InstanceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Load balancer name, unique per region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadBalancerName(String);

impl LoadBalancerName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LoadBalancerName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for LoadBalancerName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for LoadBalancerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only view of a load balancer returned by the control plane.
///
/// Only the name and the member instance list are consumed; everything else
/// in the remote descriptor is dropped at the transport boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadBalancerDescriptor {
    /// Load balancer name.
    pub name: LoadBalancerName,

    /// Instances currently registered with this load balancer.
    pub instance_ids: Vec<InstanceId>,
}

/// Errors that can occur during ELB operations.
#[derive(Debug, Error)]
pub enum ElbError {
    /// Client construction rejected its inputs. Raised before any remote
    /// call is attempted.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The control-plane call failed. The underlying SDK error is kept as
    /// the source, untranslated; this layer adds no retries.
    #[error("remote service error during {operation}: {source}")]
    Remote {
        operation: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ElbError {
    pub fn remote(
        operation: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Remote {
            operation,
            source: Box::new(source),
        }
    }
}

/// Result type for ELB operations.
pub type ElbResult<T> = Result<T, ElbError>;
