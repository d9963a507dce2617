//! Container operations

use tracing::{debug, info, warn};

use crate::core::{ContainerSummary, ResourceKind, Result, RuntimeError};
use crate::docker::DockerCli;

/// Fixed tab-separated list template; field order is a contract
pub(crate) const LIST_FORMAT: &str = "{{.ID}}\t{{.Names}}\t{{.Image}}\t{{.Status}}\t{{.Ports}}";

impl DockerCli {
    /// List all containers, including stopped ones
    pub async fn list_containers(&self) -> Result<Vec<ContainerSummary>> {
        debug!("Listing containers");

        let output = self
            .run("containers", &["ps", "-a", "--format", LIST_FORMAT])
            .await?;

        let containers = parse_container_output(&output)?;
        debug!("Found {} containers", containers.len());
        Ok(containers)
    }

    /// Start a container
    pub async fn start_container(&self, id: &str) -> Result<()> {
        info!("Starting container: {}", id);
        self.run(id, &["start", id]).await?;
        Ok(())
    }

    /// Stop a container
    pub async fn stop_container(&self, id: &str) -> Result<()> {
        info!("Stopping container: {}", id);
        self.run(id, &["stop", id]).await?;
        Ok(())
    }

    /// Force-remove a container
    pub async fn remove_container(&self, id: &str) -> Result<()> {
        warn!("Removing container: {}", id);
        self.run(id, &["rm", "-f", id]).await?;
        Ok(())
    }
}

/// Parse the tab-separated output of the container list command.
///
/// Each line carries id, name, image and status; the ports column is
/// optional and treated as empty when absent. A line with fewer than the
/// four mandatory fields fails the whole pass so a malformed batch is
/// never partially applied.
pub fn parse_container_output(output: &str) -> Result<Vec<ContainerSummary>> {
    let mut containers = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() < 4 {
            return Err(RuntimeError::parse(ResourceKind::Containers, line).into());
        }
        containers.push(ContainerSummary {
            id: parts[0].to_string(),
            name: parts[1].to_string(),
            image: parts[2].to_string(),
            status: parts[3].to_string(),
            ports: parts.get(4).unwrap_or(&"").to_string(),
        });
    }

    Ok(containers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ContainerState;

    #[test]
    fn test_parse_single_container() {
        let output = "abc123\tweb\tnginx\tUp 2 minutes\t80/tcp\n";
        let containers = parse_container_output(output).unwrap();

        assert_eq!(containers.len(), 1);
        let c = &containers[0];
        assert_eq!(c.id, "abc123");
        assert_eq!(c.name, "web");
        assert_eq!(c.image, "nginx");
        assert_eq!(c.status, "Up 2 minutes");
        assert_eq!(c.ports, "80/tcp");
        assert_eq!(c.state(), ContainerState::Running);
    }

    #[test]
    fn test_parse_missing_ports_column() {
        let output = "def456\tdb\tpostgres:14\tExited (0) 5 hours ago";
        let containers = parse_container_output(output).unwrap();

        assert_eq!(containers.len(), 1);
        assert_eq!(containers[0].ports, "");
        assert_eq!(containers[0].state(), ContainerState::Stopped);
    }

    #[test]
    fn test_parse_empty_output_is_valid() {
        assert!(parse_container_output("").unwrap().is_empty());
        assert!(parse_container_output("\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_short_line_is_error() {
        let output = "abc123\tweb\tnginx";
        let err = parse_container_output(output).unwrap_err();
        assert!(err.to_string().contains("containers"));
    }

    #[test]
    fn test_parse_aborts_whole_batch_on_malformed_line() {
        let output = "abc123\tweb\tnginx\tUp 2 minutes\t80/tcp\nbroken line\n";
        assert!(parse_container_output(output).is_err());
    }

    // Integration tests require a live daemon
    #[tokio::test]
    #[ignore = "requires Docker daemon"]
    async fn test_list_containers() {
        let cli = DockerCli::new(&crate::config::DockerConfig::default());
        let containers = cli.list_containers().await;
        assert!(containers.is_ok());
    }
}
