//! Shared mock collaborators for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use elb_registrar::elb::transport::{Connect, ElbTransport};
use elb_registrar::elb::types::{
    ElbError, ElbResult, InstanceId, LoadBalancerDescriptor, LoadBalancerName,
};

/// Error stand-in for a control-plane failure.
#[derive(Debug)]
pub struct SimulatedServiceError(pub String);

impl std::fmt::Display for SimulatedServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for SimulatedServiceError {}

/// A register/deregister request captured by the mock transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Register {
        load_balancer_name: LoadBalancerName,
        instance_ids: Vec<InstanceId>,
    },
    Deregister {
        load_balancer_name: LoadBalancerName,
        instance_ids: Vec<InstanceId>,
    },
}

#[derive(Debug, Default)]
struct MockState {
    descriptors: Vec<LoadBalancerDescriptor>,
    calls: Vec<RecordedCall>,
    fail_with: Option<String>,
}

/// In-memory transport with canned descriptors and recorded writes.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn with_descriptors(descriptors: Vec<LoadBalancerDescriptor>) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                descriptors,
                ..MockState::default()
            })),
        }
    }

    /// Make every subsequent call fail with the given remote error message.
    pub fn fail_with(&self, message: &str) {
        self.state.lock().unwrap().fail_with = Some(message.to_string());
    }

    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    fn check_failure(&self, operation: &'static str) -> ElbResult<()> {
        match &self.state.lock().unwrap().fail_with {
            Some(message) => Err(ElbError::remote(
                operation,
                SimulatedServiceError(message.clone()),
            )),
            None => Ok(()),
        }
    }
}

impl ElbTransport for MockTransport {
    async fn describe_load_balancers(&self) -> ElbResult<Vec<LoadBalancerDescriptor>> {
        self.check_failure("DescribeLoadBalancers")?;
        Ok(self.state.lock().unwrap().descriptors.clone())
    }

    async fn register_instances(
        &self,
        load_balancer_name: &LoadBalancerName,
        instance_ids: &[InstanceId],
    ) -> ElbResult<()> {
        self.check_failure("RegisterInstancesWithLoadBalancer")?;
        self.state.lock().unwrap().calls.push(RecordedCall::Register {
            load_balancer_name: load_balancer_name.clone(),
            instance_ids: instance_ids.to_vec(),
        });
        Ok(())
    }

    async fn deregister_instances(
        &self,
        load_balancer_name: &LoadBalancerName,
        instance_ids: &[InstanceId],
    ) -> ElbResult<()> {
        self.check_failure("DeregisterInstancesFromLoadBalancer")?;
        self.state
            .lock()
            .unwrap()
            .calls
            .push(RecordedCall::Deregister {
                load_balancer_name: load_balancer_name.clone(),
                instance_ids: instance_ids.to_vec(),
            });
        Ok(())
    }
}

/// Connector handing out clones of one mock transport, counting connects.
#[derive(Debug, Clone)]
pub struct MockConnector {
    transport: MockTransport,
    connect_count: Arc<AtomicUsize>,
}

impl MockConnector {
    pub fn new(transport: MockTransport) -> Self {
        Self {
            transport,
            connect_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn connect_count(&self) -> usize {
        self.connect_count.load(Ordering::SeqCst)
    }
}

impl Connect for MockConnector {
    type Transport = MockTransport;

    async fn connect(&self, _region: &str) -> ElbResult<MockTransport> {
        self.connect_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.transport.clone())
    }
}

/// Layer recording warn-level log messages for assertion.
///
/// Install per test with `tracing::subscriber::set_default` so captures are
/// isolated to the test's thread.
#[derive(Debug, Clone, Default)]
pub struct WarningCapture {
    messages: Arc<Mutex<Vec<String>>>,
}

impl WarningCapture {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::layer::Layer<S> for WarningCapture {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        if *event.metadata().level() == tracing::Level::WARN {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.messages.lock().unwrap().push(visitor.0);
        }
    }
}

/// Descriptor shorthand for test fixtures.
pub fn descriptor(name: &str, instance_ids: &[&str]) -> LoadBalancerDescriptor {
    LoadBalancerDescriptor {
        name: LoadBalancerName::from(name),
        instance_ids: instance_ids.iter().copied().map(InstanceId::from).collect(),
    }
}
