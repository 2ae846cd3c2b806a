//! Library for interacting with AWS Elastic Load Balancer instance
//! registration.
//!
//! The core is [`LoadBalancerClient`]: a region-bound client that lazily
//! connects to the classic ELB control plane and exposes three operations —
//! find the load balancers an instance is behind, register an instance with a
//! named load balancer, and deregister it. Everything is a direct
//! pass-through to the control plane; there is no caching of membership and
//! no retry layer.
//!
//! ```rust,ignore
//! use elb_registrar::elb::{LoadBalancerClient, SdkConnector};
//! use elb_registrar::elb::transport::load_sdk_config;
//!
//! let sdk_config = load_sdk_config(Some("us-east-1".into()), None).await;
//! let client = LoadBalancerClient::new(SdkConnector::new(sdk_config), "us-east-1")?;
//! let load_balancers = client.find_load_balancers(&"i-16137da5".into()).await?;
//! ```

pub mod config;
pub mod elb;
pub mod observability;

pub use config::RegistrarConfig;
pub use elb::{ElbError, ElbResult, InstanceId, LoadBalancerClient, LoadBalancerName};
