//! Core type definitions and shared types

/// Type alias for container IDs
pub type ContainerId = String;

/// Type alias for image IDs
pub type ImageId = String;

/// Type alias for volume names
pub type VolumeName = String;

/// Type alias for network IDs
pub type NetworkId = String;

/// Notification level for status messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl std::fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationLevel::Info => write!(f, "INFO"),
            NotificationLevel::Success => write!(f, "SUCCESS"),
            NotificationLevel::Warning => write!(f, "WARNING"),
            NotificationLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// The kinds of resources the runtime is asked to list and mutate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Containers,
    Images,
    Networks,
    Volumes,
}

impl ResourceKind {
    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::Containers => "containers",
            ResourceKind::Images => "images",
            ResourceKind::Networks => "networks",
            ResourceKind::Volumes => "volumes",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Application tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Containers,
    Images,
    Networks,
    Volumes,
}

impl Tab {
    /// Get all available tabs
    pub fn all() -> &'static [Tab] {
        &[Tab::Containers, Tab::Images, Tab::Networks, Tab::Volumes]
    }

    /// Get the display name for this tab
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Containers => "Containers",
            Tab::Images => "Images",
            Tab::Networks => "Networks",
            Tab::Volumes => "Volumes",
        }
    }

    /// Get the shortcut key for this tab (1-4)
    pub fn shortcut(&self) -> char {
        match self {
            Tab::Containers => '1',
            Tab::Images => '2',
            Tab::Networks => '3',
            Tab::Volumes => '4',
        }
    }

    /// The resource kind shown on this tab
    pub fn kind(&self) -> ResourceKind {
        match self {
            Tab::Containers => ResourceKind::Containers,
            Tab::Images => ResourceKind::Images,
            Tab::Networks => ResourceKind::Networks,
            Tab::Volumes => ResourceKind::Volumes,
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What an open input prompt is collecting text for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    CreateNetwork,
    CreateVolume,
    PullImage,
}

impl InputPurpose {
    pub fn title(&self) -> &'static str {
        match self {
            InputPurpose::CreateNetwork => "Create Network",
            InputPurpose::CreateVolume => "Create Volume",
            InputPurpose::PullImage => "Pull Image",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            InputPurpose::CreateNetwork => "Enter network name:",
            InputPurpose::CreateVolume => "Enter volume name:",
            InputPurpose::PullImage => "Enter image reference (e.g. ubuntu:latest):",
        }
    }
}

/// An open input dialog and the text typed so far
#[derive(Debug, Clone)]
pub struct InputPrompt {
    pub purpose: InputPurpose,
    pub value: String,
}

impl InputPrompt {
    pub fn new(purpose: InputPurpose) -> Self {
        Self {
            purpose,
            value: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_properties() {
        assert_eq!(Tab::Containers.name(), "Containers");
        assert_eq!(Tab::Containers.shortcut(), '1');
        assert_eq!(Tab::all().len(), 4);
        assert_eq!(Tab::Volumes.kind(), ResourceKind::Volumes);
    }

    #[test]
    fn test_notification_level_display() {
        assert_eq!(NotificationLevel::Error.to_string(), "ERROR");
        assert_eq!(NotificationLevel::Success.to_string(), "SUCCESS");
    }

    #[test]
    fn test_resource_kind_display() {
        assert_eq!(ResourceKind::Containers.to_string(), "containers");
        assert_eq!(ResourceKind::Volumes.to_string(), "volumes");
    }

    #[test]
    fn test_input_prompt_starts_empty() {
        let prompt = InputPrompt::new(InputPurpose::PullImage);
        assert!(prompt.value.is_empty());
        assert_eq!(prompt.purpose.title(), "Pull Image");
    }
}
