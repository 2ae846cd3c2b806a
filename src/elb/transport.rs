//! Transport seam between the client and the AWS control plane.
//!
//! # Responsibilities
//! - Define the three control-plane operations the client relies on
//! - Provide the production implementation over the classic ELB SDK
//! - Resolve the SDK configuration (region chain, named profile)
//!
//! # Design Decisions
//! - The client is generic over [`Connect`], so transport capability is a
//!   compile-time bound rather than a runtime type check
//! - Descriptors are adapted to [`LoadBalancerDescriptor`] at this boundary;
//!   no SDK types leak into the client or its callers
//! - SDK errors are carried as the error source, untranslated

use std::env;
use std::future::Future;

use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_elasticloadbalancing::types::Instance;
use aws_types::region::Region;

use crate::elb::types::{ElbError, ElbResult, InstanceId, LoadBalancerDescriptor, LoadBalancerName};

/// Control-plane operations used by the client.
///
/// Implementations issue one remote call per method and do no retrying or
/// caching of their own.
pub trait ElbTransport {
    /// Fetch descriptors for every load balancer in the region.
    fn describe_load_balancers(
        &self,
    ) -> impl Future<Output = ElbResult<Vec<LoadBalancerDescriptor>>> + Send;

    /// Register the given instances with the named load balancer.
    fn register_instances(
        &self,
        load_balancer_name: &LoadBalancerName,
        instance_ids: &[InstanceId],
    ) -> impl Future<Output = ElbResult<()>> + Send;

    /// Deregister the given instances from the named load balancer.
    fn deregister_instances(
        &self,
        load_balancer_name: &LoadBalancerName,
        instance_ids: &[InstanceId],
    ) -> impl Future<Output = ElbResult<()>> + Send;
}

/// Transport factory. Called at most once per client instance, on first use.
pub trait Connect {
    type Transport: ElbTransport;

    /// Create a transport handle bound to the given region.
    fn connect(&self, region: &str) -> impl Future<Output = ElbResult<Self::Transport>> + Send;
}

/// Resolve the SDK configuration used to authenticate against AWS.
///
/// Region resolution order: the explicit argument, then
/// `AWS_DEFAULT_REGION`, then the default provider chain (profile, IMDS).
/// Credential resolution itself is entirely the SDK's business.
pub async fn load_sdk_config(region: Option<String>, profile: Option<String>) -> SdkConfig {
    let explicit = match region {
        Some(region) => Some(Region::new(region)),
        None => env::var("AWS_DEFAULT_REGION").ok().map(Region::new),
    };
    let region_provider = RegionProviderChain::first_try(explicit).or_default_provider();

    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
    if let Some(profile) = profile {
        loader = loader.profile_name(profile);
    }
    loader.load().await
}

/// Factory for [`SdkTransport`] handles.
///
/// Holds the pre-authenticated SDK configuration; the region override is
/// applied when the client first connects.
#[derive(Debug, Clone)]
pub struct SdkConnector {
    sdk_config: SdkConfig,
}

impl SdkConnector {
    pub fn new(sdk_config: SdkConfig) -> Self {
        Self { sdk_config }
    }
}

impl Connect for SdkConnector {
    type Transport = SdkTransport;

    async fn connect(&self, region: &str) -> ElbResult<SdkTransport> {
        let conf = aws_sdk_elasticloadbalancing::config::Builder::from(&self.sdk_config)
            .region(Region::new(region.to_string()))
            .build();
        Ok(SdkTransport {
            client: aws_sdk_elasticloadbalancing::Client::from_conf(conf),
        })
    }
}

/// Production transport over the classic ELB API.
#[derive(Debug, Clone)]
pub struct SdkTransport {
    client: aws_sdk_elasticloadbalancing::Client,
}

impl ElbTransport for SdkTransport {
    async fn describe_load_balancers(&self) -> ElbResult<Vec<LoadBalancerDescriptor>> {
        let output = self
            .client
            .describe_load_balancers()
            .send()
            .await
            .map_err(|e| ElbError::remote("DescribeLoadBalancers", e))?;

        let descriptors = output
            .load_balancer_descriptions()
            .iter()
            .filter_map(|lb| {
                let name = LoadBalancerName::from(lb.load_balancer_name()?);
                let instance_ids = lb
                    .instances()
                    .iter()
                    .filter_map(|i| i.instance_id())
                    .map(InstanceId::from)
                    .collect();
                Some(LoadBalancerDescriptor { name, instance_ids })
            })
            .collect();

        Ok(descriptors)
    }

    async fn register_instances(
        &self,
        load_balancer_name: &LoadBalancerName,
        instance_ids: &[InstanceId],
    ) -> ElbResult<()> {
        let mut request = self
            .client
            .register_instances_with_load_balancer()
            .load_balancer_name(load_balancer_name.as_str());
        for id in instance_ids {
            request = request.instances(Instance::builder().instance_id(id.as_str()).build());
        }
        request
            .send()
            .await
            .map_err(|e| ElbError::remote("RegisterInstancesWithLoadBalancer", e))?;
        Ok(())
    }

    async fn deregister_instances(
        &self,
        load_balancer_name: &LoadBalancerName,
        instance_ids: &[InstanceId],
    ) -> ElbResult<()> {
        let mut request = self
            .client
            .deregister_instances_from_load_balancer()
            .load_balancer_name(load_balancer_name.as_str());
        for id in instance_ids {
            request = request.instances(Instance::builder().instance_id(id.as_str()).build());
        }
        request
            .send()
            .await
            .map_err(|e| ElbError::remote("DeregisterInstancesFromLoadBalancer", e))?;
        Ok(())
    }
}
