//! ELB instance-registration subsystem.
//!
//! # Data Flow
//! ```text
//! caller (library user or elb-cli)
//!     → client.rs (lazy connect, filter, logging)
//!     → transport.rs (classic ELB API calls)
//!     → AWS control plane
//! ```
//!
//! # Constraints
//! - A client is locked to one region for its lifetime
//! - The transport handle is created once, on first use
//! - No membership cache and no retries; failures are the caller's to handle

pub mod client;
pub mod transport;
pub mod types;

pub use client::LoadBalancerClient;
pub use transport::{Connect, ElbTransport, SdkConnector, SdkTransport};
pub use types::{ElbError, ElbResult, InstanceId, LoadBalancerDescriptor, LoadBalancerName};
