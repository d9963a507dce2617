//! Volume operations

use tracing::{debug, info, warn};

use crate::core::{ResourceKind, Result, RuntimeError, VolumeSummary};
use crate::docker::DockerCli;

pub(crate) const LIST_FORMAT: &str = "{{.Name}}\t{{.Driver}}\t{{.Mountpoint}}";

impl DockerCli {
    /// List all volumes
    pub async fn list_volumes(&self) -> Result<Vec<VolumeSummary>> {
        debug!("Listing volumes");

        let output = self
            .run("volumes", &["volume", "ls", "--format", LIST_FORMAT])
            .await?;

        let volumes = parse_volume_output(&output)?;
        debug!("Found {} volumes", volumes.len());
        Ok(volumes)
    }

    /// Create a volume
    pub async fn create_volume(&self, name: &str) -> Result<()> {
        info!("Creating volume: {}", name);
        self.run(name, &["volume", "create", name]).await?;
        info!("Volume {} created successfully", name);
        Ok(())
    }

    /// Remove a volume
    pub async fn remove_volume(&self, name: &str) -> Result<()> {
        warn!("Removing volume: {}", name);
        self.run(name, &["volume", "rm", name]).await?;
        Ok(())
    }
}

/// Parse the tab-separated output of the volume list command.
/// Exactly three fields per line: name, driver, mountpoint.
pub fn parse_volume_output(output: &str) -> Result<Vec<VolumeSummary>> {
    let mut volumes = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() != 3 {
            return Err(RuntimeError::parse(ResourceKind::Volumes, line).into());
        }
        volumes.push(VolumeSummary {
            name: parts[0].to_string(),
            driver: parts[1].to_string(),
            mountpoint: parts[2].to_string(),
        });
    }

    Ok(volumes)
}
