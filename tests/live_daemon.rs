//! Smoke tests against a live daemon
//!
//! Use `cargo test -- --ignored` with Docker running to exercise them.

use dockhand::config::DockerConfig;
use dockhand::docker::{ContainerRuntime, DockerCli};

#[tokio::test]
#[ignore = "requires Docker daemon"]
async fn test_version_probe() {
    let cli = DockerCli::new(&DockerConfig::default());
    let info = ContainerRuntime::version(&cli).await.unwrap();
    assert!(!info.version.is_empty());
}

#[tokio::test]
#[ignore = "requires Docker daemon"]
async fn test_list_every_kind() {
    let cli = DockerCli::new(&DockerConfig::default());

    // Listing must succeed even when every list is empty
    assert!(cli.list_containers().await.is_ok());
    assert!(cli.list_images().await.is_ok());
    assert!(cli.list_networks().await.is_ok());
    assert!(cli.list_volumes().await.is_ok());
}

#[tokio::test]
#[ignore = "requires Docker daemon"]
async fn test_volume_lifecycle() {
    let cli = DockerCli::new(&DockerConfig::default());
    let name = "dockhand-test-volume";

    cli.create_volume(name).await.unwrap();
    let volumes = cli.list_volumes().await.unwrap();
    assert!(volumes.iter().any(|v| v.name == name));

    cli.remove_volume(name).await.unwrap();
    let volumes = cli.list_volumes().await.unwrap();
    assert!(!volumes.iter().any(|v| v.name == name));
}
