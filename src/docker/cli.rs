//! CLI-based container runtime client
//!
//! Drives the runtime through direct CLI invocations instead of an engine
//! API for:
//! - Automatic credential handling (via ~/.docker/config.json)
//! - Proper user context handling (no socket permission issues)
//! - Works with Docker alternatives (Podman, Colima, Rancher, OrbStack)

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::config::DockerConfig;
use crate::core::{
    ConnectionInfo, ContainerSummary, ImageSummary, NetworkSummary, Result, RuntimeError,
    VolumeSummary,
};

/// Operations the application needs from a container runtime.
///
/// [`DockerCli`] implements this against the real CLI; tests substitute
/// [`crate::docker::test_support::MockRuntime`].
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// The runtime binary name, for embedding in external-terminal commands
    fn program(&self) -> &str;

    async fn version(&self) -> Result<ConnectionInfo>;

    async fn list_containers(&self) -> Result<Vec<ContainerSummary>>;
    async fn list_images(&self) -> Result<Vec<ImageSummary>>;
    async fn list_networks(&self) -> Result<Vec<NetworkSummary>>;
    async fn list_volumes(&self) -> Result<Vec<VolumeSummary>>;

    async fn start_container(&self, id: &str) -> Result<()>;
    async fn stop_container(&self, id: &str) -> Result<()>;
    async fn remove_container(&self, id: &str) -> Result<()>;

    async fn pull_image(&self, reference: &str) -> Result<()>;
    async fn remove_image(&self, id: &str) -> Result<()>;

    async fn create_network(&self, name: &str) -> Result<()>;
    async fn remove_network(&self, name: &str) -> Result<()>;

    async fn create_volume(&self, name: &str) -> Result<()>;
    async fn remove_volume(&self, name: &str) -> Result<()>;
}

/// Container runtime CLI client
#[derive(Debug, Clone)]
pub struct DockerCli {
    /// Binary to invoke ("docker" or "podman")
    program: String,
    /// Optional wrapper invocation (e.g. ["flatpak-spawn", "--host"])
    prefix: Vec<String>,
}

impl DockerCli {
    /// Create a client from the runtime section of the configuration
    pub fn new(config: &DockerConfig) -> Self {
        Self {
            program: config.command.clone(),
            prefix: config.command_prefix.clone(),
        }
    }

    /// Build a command with the configured wrapper prefix
    fn build_command(&self) -> Command {
        if self.prefix.is_empty() {
            Command::new(&self.program)
        } else {
            let mut cmd = Command::new(&self.prefix[0]);
            for prefix_arg in &self.prefix[1..] {
                cmd.arg(prefix_arg);
            }
            cmd.arg(&self.program);
            cmd
        }
    }

    /// Run one runtime command to completion and return its stdout.
    ///
    /// An invocation failure surfaces as `Unavailable`; a non-zero exit
    /// as `CommandFailed` carrying `key` and the trimmed stderr. The call
    /// blocks its caller for the duration of the external command; no
    /// internal timeout is imposed.
    pub(crate) async fn run(&self, key: &str, args: &[&str]) -> Result<String> {
        debug!("Running: {} {}", self.program, args.join(" "));

        let mut cmd = self.build_command();
        cmd.args(args);

        let output = cmd
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| RuntimeError::Unavailable(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(RuntimeError::command_failed(key, stderr).into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[async_trait]
impl ContainerRuntime for DockerCli {
    fn program(&self) -> &str {
        &self.program
    }

    async fn version(&self) -> Result<ConnectionInfo> {
        DockerCli::version(self).await
    }

    async fn list_containers(&self) -> Result<Vec<ContainerSummary>> {
        DockerCli::list_containers(self).await
    }

    async fn list_images(&self) -> Result<Vec<ImageSummary>> {
        DockerCli::list_images(self).await
    }

    async fn list_networks(&self) -> Result<Vec<NetworkSummary>> {
        DockerCli::list_networks(self).await
    }

    async fn list_volumes(&self) -> Result<Vec<VolumeSummary>> {
        DockerCli::list_volumes(self).await
    }

    async fn start_container(&self, id: &str) -> Result<()> {
        DockerCli::start_container(self, id).await
    }

    async fn stop_container(&self, id: &str) -> Result<()> {
        DockerCli::stop_container(self, id).await
    }

    async fn remove_container(&self, id: &str) -> Result<()> {
        DockerCli::remove_container(self, id).await
    }

    async fn pull_image(&self, reference: &str) -> Result<()> {
        DockerCli::pull_image(self, reference).await
    }

    async fn remove_image(&self, id: &str) -> Result<()> {
        DockerCli::remove_image(self, id).await
    }

    async fn create_network(&self, name: &str) -> Result<()> {
        DockerCli::create_network(self, name).await
    }

    async fn remove_network(&self, name: &str) -> Result<()> {
        DockerCli::remove_network(self, name).await
    }

    async fn create_volume(&self, name: &str) -> Result<()> {
        DockerCli::create_volume(self, name).await
    }

    async fn remove_volume(&self, name: &str) -> Result<()> {
        DockerCli::remove_volume(self, name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DockerConfig;

    #[test]
    fn test_client_from_config() {
        let cli = DockerCli::new(&DockerConfig {
            command: "podman".to_string(),
            command_prefix: vec![],
        });
        assert_eq!(cli.program(), "podman");
    }

    #[tokio::test]
    async fn test_missing_binary_is_unavailable() {
        let cli = DockerCli::new(&DockerConfig {
            command: "definitely-not-a-container-runtime".to_string(),
            command_prefix: vec![],
        });

        let err = cli.run("containers", &["ps"]).await.unwrap_err();
        assert!(matches!(
            err,
            crate::core::DockhandError::Runtime(RuntimeError::Unavailable(_))
        ));
    }
}
