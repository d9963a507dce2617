//! Runtime version probe

use serde::Deserialize;
use tracing::debug;

use crate::core::{ConnectionInfo, Result, RuntimeError};
use crate::docker::DockerCli;

#[derive(Debug, Deserialize)]
struct VersionDoc {
    #[serde(rename = "Client")]
    client: Option<VersionSection>,
    #[serde(rename = "Server")]
    server: Option<VersionSection>,
}

#[derive(Debug, Deserialize)]
struct VersionSection {
    #[serde(rename = "Version")]
    version: Option<String>,
    #[serde(rename = "ApiVersion")]
    api_version: Option<String>,
    #[serde(rename = "Os")]
    os: Option<String>,
    #[serde(rename = "Arch")]
    arch: Option<String>,
}

impl DockerCli {
    /// Probe the runtime's version.
    ///
    /// Used once at startup to report what the UI is connected to; a
    /// failure here means the runtime is unreachable, not fatal to the
    /// application.
    pub async fn version(&self) -> Result<ConnectionInfo> {
        debug!("Probing runtime version");

        let output = self
            .run("version", &["version", "--format", "{{json .}}"])
            .await?;

        parse_version_output(&output)
    }
}

/// Parse the JSON emitted by `version --format {{json .}}`.
/// Prefers the server section, falling back to the client when the
/// daemon did not answer.
pub fn parse_version_output(output: &str) -> Result<ConnectionInfo> {
    let doc: VersionDoc = serde_json::from_str(output.trim())
        .map_err(|e| RuntimeError::Unavailable(format!("version output was not JSON: {}", e)))?;

    let section = doc
        .server
        .or(doc.client)
        .ok_or_else(|| RuntimeError::Unavailable("version output had no sections".to_string()))?;

    let unknown = || "unknown".to_string();
    Ok(ConnectionInfo {
        version: section.version.unwrap_or_else(unknown),
        api_version: section.api_version.unwrap_or_else(unknown),
        os: section.os.unwrap_or_else(unknown),
        arch: section.arch.unwrap_or_else(unknown),
    })
}
