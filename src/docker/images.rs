//! Image operations

use tracing::{debug, info, warn};

use crate::core::{ImageSummary, ResourceKind, Result, RuntimeError};
use crate::docker::DockerCli;

pub(crate) const LIST_FORMAT: &str = "{{.ID}}\t{{.Repository}}\t{{.Tag}}\t{{.Size}}";

impl DockerCli {
    /// List all images
    pub async fn list_images(&self) -> Result<Vec<ImageSummary>> {
        debug!("Listing images");

        let output = self.run("images", &["images", "--format", LIST_FORMAT]).await?;

        let images = parse_image_output(&output)?;
        debug!("Found {} images", images.len());
        Ok(images)
    }

    /// Pull an image by reference
    pub async fn pull_image(&self, reference: &str) -> Result<()> {
        info!("Pulling image: {}", reference);
        self.run(reference, &["pull", reference]).await?;
        info!("Image {} pulled successfully", reference);
        Ok(())
    }

    /// Remove an image
    pub async fn remove_image(&self, id: &str) -> Result<()> {
        warn!("Removing image: {}", id);
        self.run(id, &["rmi", id]).await?;
        Ok(())
    }
}

/// Parse the tab-separated output of the image list command.
/// All four fields are mandatory.
pub fn parse_image_output(output: &str) -> Result<Vec<ImageSummary>> {
    let mut images = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() != 4 {
            return Err(RuntimeError::parse(ResourceKind::Images, line).into());
        }
        images.push(ImageSummary {
            id: parts[0].to_string(),
            repository: parts[1].to_string(),
            tag: parts[2].to_string(),
            size: parts[3].to_string(),
        });
    }

    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_images() {
        let output = "f2a1b3\tnginx\tlatest\t187MB\n9c8d7e\tpostgres\t14\t412MB\n";
        let images = parse_image_output(output).unwrap();

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].repository, "nginx");
        assert_eq!(images[1].tag, "14");
    }

    #[test]
    fn test_parse_wrong_field_count_is_error() {
        assert!(parse_image_output("f2a1b3\tnginx\tlatest").is_err());
        assert!(parse_image_output("f2a1b3\tnginx\tlatest\t187MB\textra").is_err());
    }

    #[test]
    fn test_parse_empty_output_is_valid() {
        assert!(parse_image_output("").unwrap().is_empty());
    }

    #[tokio::test]
    #[ignore = "requires Docker daemon"]
    async fn test_list_images() {
        let cli = DockerCli::new(&crate::config::DockerConfig::default());
        let images = cli.list_images().await;
        assert!(images.is_ok());
    }
}
