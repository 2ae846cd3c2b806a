//! Region-bound ELB client with a lazily-created transport handle.
//!
//! # Responsibilities
//! - Connect to the control plane on first use and memoize the handle
//! - Find the load balancers an instance is registered with
//! - Register/deregister an instance with a named load balancer
//!
//! # Design Decisions
//! - One transport handle per client, created at most once
//!   (`tokio::sync::OnceCell` makes concurrent first calls safe)
//! - No membership cache: every query round-trips to the control plane
//! - Remote failures propagate unchanged; no retries at this layer

use tokio::sync::OnceCell;

use crate::elb::transport::{Connect, ElbTransport};
use crate::elb::types::{ElbError, ElbResult, InstanceId, LoadBalancerName};
use crate::observability::metrics;

/// Client for ELB instance registration, locked to one region for its
/// lifetime.
pub struct LoadBalancerClient<C: Connect> {
    region: String,
    connector: C,
    transport: OnceCell<C::Transport>,
}

impl<C: Connect> std::fmt::Debug for LoadBalancerClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadBalancerClient")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

impl<C: Connect> LoadBalancerClient<C> {
    /// Create a client bound to the given region.
    ///
    /// No remote call is made here; the transport handle is created on the
    /// first operation. Fails with [`ElbError::Configuration`] when the
    /// region is empty.
    pub fn new(connector: C, region: impl Into<String>) -> ElbResult<Self> {
        let region = region.into();
        if region.trim().is_empty() {
            return Err(ElbError::Configuration(
                "region must not be empty".to_string(),
            ));
        }
        Ok(Self {
            region,
            connector,
            transport: OnceCell::new(),
        })
    }

    /// The region this client is bound to.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns the transport handle, connecting on the first call.
    ///
    /// Concurrent first calls race inside the cell, but the connector runs
    /// at most once; every later call returns the cached handle.
    async fn transport(&self) -> ElbResult<&C::Transport> {
        self.transport
            .get_or_try_init(|| async {
                tracing::debug!(region = %self.region, "connecting to ELB control plane");
                self.connector.connect(&self.region).await
            })
            .await
    }

    /// Returns the names of the load balancers the given instance is
    /// registered with, in the order the control plane returned them.
    ///
    /// An instance behind no load balancer yields an empty list, not an
    /// error. More than one match is an operational anomaly and is logged
    /// at warn level, but all names are still returned.
    pub async fn find_load_balancers(
        &self,
        instance: &InstanceId,
    ) -> ElbResult<Vec<LoadBalancerName>> {
        let transport = self.transport().await?;
        let result = transport.describe_load_balancers().await;
        metrics::record_api_call("DescribeLoadBalancers", result.is_ok());

        let load_balancers: Vec<LoadBalancerName> = result?
            .into_iter()
            .filter(|lb| lb.instance_ids.iter().any(|id| id == instance))
            .map(|lb| lb.name)
            .collect();

        tracing::info!(
            instance = %instance,
            load_balancers = ?load_balancers,
            "found load balancers"
        );

        if load_balancers.len() > 1 {
            tracing::warn!(
                instance = %instance,
                load_balancers = ?load_balancers,
                "instance is registered with multiple load balancers"
            );
        }

        Ok(load_balancers)
    }

    /// Register the given instance with the named load balancer.
    ///
    /// Pass-through: no check that the load balancer exists beforehand, and
    /// remote errors surface unchanged.
    pub async fn add_instance(
        &self,
        instance: &InstanceId,
        load_balancer_name: &LoadBalancerName,
    ) -> ElbResult<()> {
        let transport = self.transport().await?;
        let result = transport
            .register_instances(load_balancer_name, std::slice::from_ref(instance))
            .await;
        metrics::record_api_call("RegisterInstancesWithLoadBalancer", result.is_ok());
        result?;

        tracing::info!(
            instance = %instance,
            load_balancer = %load_balancer_name,
            "added instance to load balancer"
        );
        Ok(())
    }

    /// Deregister the given instance from the named load balancer.
    pub async fn remove_instance(
        &self,
        instance: &InstanceId,
        load_balancer_name: &LoadBalancerName,
    ) -> ElbResult<()> {
        let transport = self.transport().await?;
        let result = transport
            .deregister_instances(load_balancer_name, std::slice::from_ref(instance))
            .await;
        metrics::record_api_call("DeregisterInstancesFromLoadBalancer", result.is_ok());
        result?;

        tracing::info!(
            instance = %instance,
            load_balancer = %load_balancer_name,
            "removed instance from load balancer"
        );
        Ok(())
    }
}
