//! Test support utilities
//!
//! Provides a configurable [`MockRuntime`] for exercising the refresh and
//! dispatch paths without a real Docker/Podman installation.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::{
    ConnectionInfo, ContainerSummary, ImageSummary, NetworkSummary, ResourceKind, Result,
    RuntimeError, VolumeSummary,
};
use crate::docker::ContainerRuntime;

/// Records which methods were called on the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Version,
    List { kind: ResourceKind },
    Start { id: String },
    Stop { id: String },
    RemoveContainer { id: String },
    Pull { reference: String },
    RemoveImage { id: String },
    CreateNetwork { name: String },
    RemoveNetwork { name: String },
    CreateVolume { name: String },
    RemoveVolume { name: String },
}

/// Configurable mock container runtime for testing
#[derive(Default)]
pub struct MockRuntime {
    pub calls: Mutex<Vec<MockCall>>,
    pub containers: Mutex<Vec<ContainerSummary>>,
    pub images: Mutex<Vec<ImageSummary>>,
    pub networks: Mutex<Vec<NetworkSummary>>,
    pub volumes: Mutex<Vec<VolumeSummary>>,
    /// Kinds whose list calls fail with CommandFailed
    pub failing_lists: Mutex<HashSet<ResourceKind>>,
    /// Keys whose lifecycle commands fail with CommandFailed
    pub failing_keys: Mutex<HashSet<String>>,
}

impl MockRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the container list
    pub fn with_containers(self, containers: Vec<ContainerSummary>) -> Self {
        *self.containers.lock().unwrap() = containers;
        self
    }

    /// Make every list call for `kind` fail
    pub fn fail_list(self, kind: ResourceKind) -> Self {
        self.failing_lists.lock().unwrap().insert(kind);
        self
    }

    /// Make every lifecycle command against `key` fail
    pub fn fail_key(self, key: &str) -> Self {
        self.failing_keys.lock().unwrap().insert(key.to_string());
        self
    }

    fn record(&self, call: MockCall) {
        self.calls.lock().unwrap().push(call);
    }

    /// Get all recorded calls
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Check if a specific call was made
    pub fn was_called(&self, call: &MockCall) -> bool {
        self.calls.lock().unwrap().contains(call)
    }

    fn check_list(&self, kind: ResourceKind) -> Result<()> {
        if self.failing_lists.lock().unwrap().contains(&kind) {
            return Err(RuntimeError::command_failed(kind.name(), "mock list failure").into());
        }
        Ok(())
    }

    fn check_key(&self, key: &str) -> Result<()> {
        if self.failing_keys.lock().unwrap().contains(key) {
            return Err(RuntimeError::command_failed(key, "mock command failure").into());
        }
        Ok(())
    }
}

#[async_trait]
impl ContainerRuntime for MockRuntime {
    fn program(&self) -> &str {
        "docker"
    }

    async fn version(&self) -> Result<ConnectionInfo> {
        self.record(MockCall::Version);
        Ok(ConnectionInfo::default())
    }

    async fn list_containers(&self) -> Result<Vec<ContainerSummary>> {
        self.record(MockCall::List {
            kind: ResourceKind::Containers,
        });
        self.check_list(ResourceKind::Containers)?;
        Ok(self.containers.lock().unwrap().clone())
    }

    async fn list_images(&self) -> Result<Vec<ImageSummary>> {
        self.record(MockCall::List {
            kind: ResourceKind::Images,
        });
        self.check_list(ResourceKind::Images)?;
        Ok(self.images.lock().unwrap().clone())
    }

    async fn list_networks(&self) -> Result<Vec<NetworkSummary>> {
        self.record(MockCall::List {
            kind: ResourceKind::Networks,
        });
        self.check_list(ResourceKind::Networks)?;
        Ok(self.networks.lock().unwrap().clone())
    }

    async fn list_volumes(&self) -> Result<Vec<VolumeSummary>> {
        self.record(MockCall::List {
            kind: ResourceKind::Volumes,
        });
        self.check_list(ResourceKind::Volumes)?;
        Ok(self.volumes.lock().unwrap().clone())
    }

    async fn start_container(&self, id: &str) -> Result<()> {
        self.record(MockCall::Start { id: id.to_string() });
        self.check_key(id)
    }

    async fn stop_container(&self, id: &str) -> Result<()> {
        self.record(MockCall::Stop { id: id.to_string() });
        self.check_key(id)
    }

    async fn remove_container(&self, id: &str) -> Result<()> {
        self.record(MockCall::RemoveContainer { id: id.to_string() });
        self.check_key(id)
    }

    async fn pull_image(&self, reference: &str) -> Result<()> {
        self.record(MockCall::Pull {
            reference: reference.to_string(),
        });
        self.check_key(reference)
    }

    async fn remove_image(&self, id: &str) -> Result<()> {
        self.record(MockCall::RemoveImage { id: id.to_string() });
        self.check_key(id)
    }

    async fn create_network(&self, name: &str) -> Result<()> {
        self.record(MockCall::CreateNetwork {
            name: name.to_string(),
        });
        self.check_key(name)
    }

    async fn remove_network(&self, name: &str) -> Result<()> {
        self.record(MockCall::RemoveNetwork {
            name: name.to_string(),
        });
        self.check_key(name)
    }

    async fn create_volume(&self, name: &str) -> Result<()> {
        self.record(MockCall::CreateVolume {
            name: name.to_string(),
        });
        self.check_key(name)
    }

    async fn remove_volume(&self, name: &str) -> Result<()> {
        self.record(MockCall::RemoveVolume {
            name: name.to_string(),
        });
        self.check_key(name)
    }
}

/// A container summary with sensible defaults for tests
pub fn container(id: &str, name: &str, status: &str) -> ContainerSummary {
    ContainerSummary {
        id: id.to_string(),
        name: name.to_string(),
        image: "nginx:latest".to_string(),
        status: status.to_string(),
        ports: String::new(),
    }
}
