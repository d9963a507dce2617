//! Network operations

use tracing::{debug, info, warn};

use crate::core::{NetworkSummary, ResourceKind, Result, RuntimeError};
use crate::docker::DockerCli;

pub(crate) const LIST_FORMAT: &str = "{{.ID}}\t{{.Name}}\t{{.Driver}}";

impl DockerCli {
    /// List all networks
    pub async fn list_networks(&self) -> Result<Vec<NetworkSummary>> {
        debug!("Listing networks");

        let output = self
            .run("networks", &["network", "ls", "--format", LIST_FORMAT])
            .await?;

        let networks = parse_network_output(&output)?;
        debug!("Found {} networks", networks.len());
        Ok(networks)
    }

    /// Create a network
    pub async fn create_network(&self, name: &str) -> Result<()> {
        info!("Creating network: {}", name);
        self.run(name, &["network", "create", name]).await?;
        info!("Network {} created successfully", name);
        Ok(())
    }

    /// Remove a network
    pub async fn remove_network(&self, name: &str) -> Result<()> {
        warn!("Removing network: {}", name);
        self.run(name, &["network", "rm", name]).await?;
        Ok(())
    }
}

/// Parse the tab-separated output of the network list command.
/// Exactly three fields per line: id, name, driver.
pub fn parse_network_output(output: &str) -> Result<Vec<NetworkSummary>> {
    let mut networks = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() != 3 {
            return Err(RuntimeError::parse(ResourceKind::Networks, line).into());
        }
        networks.push(NetworkSummary {
            id: parts[0].to_string(),
            name: parts[1].to_string(),
            driver: parts[2].to_string(),
        });
    }

    Ok(networks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_networks() {
        let output = "n1a2b3\tbridge\tbridge\nn4c5d6\tbackend\toverlay\n";
        let networks = parse_network_output(output).unwrap();

        assert_eq!(networks.len(), 2);
        assert_eq!(networks[0].name, "bridge");
        assert_eq!(networks[1].driver, "overlay");
    }

    #[test]
    fn test_parse_wrong_field_count_is_error() {
        assert!(parse_network_output("n1a2b3\tbridge").is_err());
        assert!(parse_network_output("n1a2b3\tbridge\tbridge\textra").is_err());
    }

    #[test]
    fn test_parse_empty_output_is_valid() {
        assert!(parse_network_output("").unwrap().is_empty());
    }

    #[tokio::test]
    #[ignore = "requires Docker daemon"]
    async fn test_list_networks() {
        let cli = DockerCli::new(&crate::config::DockerConfig::default());
        let networks = cli.list_networks().await;
        assert!(networks.is_ok());
    }
}
