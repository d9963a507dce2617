use serde::{Deserialize, Serialize};

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::{
    ContainerId, ImageId, InputPrompt, InputPurpose, NetworkId, NotificationLevel, ResourceKind,
    Tab, VolumeName,
};

/// Runtime version information from the version probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionInfo {
    pub version: String,
    pub api_version: String,
    pub os: String,
    pub arch: String,
}

impl Default for ConnectionInfo {
    fn default() -> Self {
        Self {
            version: "unknown".to_string(),
            api_version: "unknown".to_string(),
            os: "unknown".to_string(),
            arch: "unknown".to_string(),
        }
    }
}

/// Container runtime state, classified from the status column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerState {
    Running,
    Stopped,
}

impl ContainerState {
    /// Classify the `ps` status column.
    ///
    /// The CLI renders running containers as "Up 2 minutes", "Up 3 days
    /// (Paused)" etc., and everything else ("Exited (0) ...", "Created",
    /// "Dead") as stopped. This is the only place that reads the status
    /// text; the rest of the crate consults the enum.
    pub fn from_status(status: &str) -> Self {
        if status.trim_start().starts_with("Up") {
            ContainerState::Running
        } else {
            ContainerState::Stopped
        }
    }
}

impl std::fmt::Display for ContainerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerState::Running => write!(f, "Running"),
            ContainerState::Stopped => write!(f, "Stopped"),
        }
    }
}

/// A record listed by the runtime, identified by a stable primary key
pub trait ResourceRecord {
    /// The stable identifying field (id or name, kind-dependent)
    fn key(&self) -> &str;

    /// All displayable fields, for substring filtering
    fn fields(&self) -> Vec<&str>;
}

/// Container summary for list views
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContainerSummary {
    pub id: String,
    pub name: String,
    pub image: String,
    pub status: String,
    pub ports: String,
}

impl ContainerSummary {
    pub fn state(&self) -> ContainerState {
        ContainerState::from_status(&self.status)
    }
}

impl ResourceRecord for ContainerSummary {
    fn key(&self) -> &str {
        &self.id
    }

    fn fields(&self) -> Vec<&str> {
        vec![&self.id, &self.name, &self.image, &self.status, &self.ports]
    }
}

/// Image summary for list views
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageSummary {
    pub id: String,
    pub repository: String,
    pub tag: String,
    pub size: String,
}

impl ResourceRecord for ImageSummary {
    fn key(&self) -> &str {
        &self.id
    }

    fn fields(&self) -> Vec<&str> {
        vec![&self.id, &self.repository, &self.tag, &self.size]
    }
}

/// Network summary for list views
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkSummary {
    pub id: String,
    pub name: String,
    pub driver: String,
}

impl ResourceRecord for NetworkSummary {
    fn key(&self) -> &str {
        &self.id
    }

    fn fields(&self) -> Vec<&str> {
        vec![&self.id, &self.name, &self.driver]
    }
}

/// Volume summary for list views; volumes have no separate id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolumeSummary {
    pub name: String,
    pub driver: String,
    pub mountpoint: String,
}

impl ResourceRecord for VolumeSummary {
    fn key(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> Vec<&str> {
        vec![&self.name, &self.driver, &self.mountpoint]
    }
}

/// Actions that can be triggered from the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Refresh all resource lists now
    Refresh,
    /// Start a container
    StartContainer(String),
    /// Stop a container
    StopContainer(String),
    /// Remove a container
    RemoveContainer(String),
    /// Pull an image by reference
    PullImage(String),
    /// Remove an image
    RemoveImage(String),
    /// Create a network
    CreateNetwork(String),
    /// Remove a network (by name, as the CLI resolves either)
    RemoveNetwork(String),
    /// Create a volume
    CreateVolume(String),
    /// Remove a volume
    RemoveVolume(String),
    /// Open an interactive shell into a container in an external terminal
    OpenTerminal(String),
    /// Follow a container's logs in an external terminal
    OpenLogs(String),
}

/// A pending action awaiting yes/no confirmation
#[derive(Debug, Clone)]
pub struct ConfirmAction {
    pub message: String,
    pub action: UiAction,
}

impl ConfirmAction {
    pub fn new(message: impl Into<String>, action: UiAction) -> Self {
        Self {
            message: message.into(),
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_state_classification() {
        assert_eq!(
            ContainerState::from_status("Up 2 minutes"),
            ContainerState::Running
        );
        assert_eq!(
            ContainerState::from_status("Up 3 days (Paused)"),
            ContainerState::Running
        );
        assert_eq!(
            ContainerState::from_status("Exited (0) 5 hours ago"),
            ContainerState::Stopped
        );
        assert_eq!(ContainerState::from_status("Created"), ContainerState::Stopped);
        assert_eq!(ContainerState::from_status(""), ContainerState::Stopped);
    }

    #[test]
    fn test_container_state_display() {
        assert_eq!(ContainerState::Running.to_string(), "Running");
        assert_eq!(ContainerState::Stopped.to_string(), "Stopped");
    }

    #[test]
    fn test_primary_keys() {
        let c = ContainerSummary {
            id: "abc".into(),
            ..Default::default()
        };
        assert_eq!(c.key(), "abc");

        let v = VolumeSummary {
            name: "data1".into(),
            ..Default::default()
        };
        assert_eq!(v.key(), "data1");
    }

    #[test]
    fn test_fields_cover_every_column() {
        let c = ContainerSummary {
            id: "abc".into(),
            name: "web".into(),
            image: "nginx".into(),
            status: "Up 2 minutes".into(),
            ports: "80/tcp".into(),
        };
        assert_eq!(c.fields().len(), 5);
        assert!(c.fields().contains(&"80/tcp"));
    }
}
