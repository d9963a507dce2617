use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub docker: DockerConfig,
    #[serde(default)]
    pub logging: LogConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Period of the automatic refresh pass, in milliseconds
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_ms: u64,
    /// Whether automatic refresh starts enabled
    #[serde(default = "default_true")]
    pub auto_refresh: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: default_refresh_interval(),
            auto_refresh: true,
        }
    }
}

/// UI customization settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub mouse_enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
        }
    }
}

/// Container runtime CLI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockerConfig {
    /// The runtime binary to invoke ("docker" or "podman")
    #[serde(default = "default_command")]
    pub command: String,
    /// Wrapper invocation prepended to every call, e.g.
    /// ["flatpak-spawn", "--host"] inside a sandbox
    #[serde(default)]
    pub command_prefix: Vec<String>,
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            command_prefix: vec![],
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

// Default value functions
fn default_refresh_interval() -> u64 {
    1000
}

fn default_command() -> String {
    "docker".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let general = GeneralConfig::default();
        assert_eq!(general.refresh_interval_ms, 1000);
        assert!(general.auto_refresh);

        let docker = DockerConfig::default();
        assert_eq!(docker.command, "docker");
        assert!(docker.command_prefix.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(!toml_str.is_empty());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [docker]
            command = "podman"
            "#,
        )
        .unwrap();
        assert_eq!(config.docker.command, "podman");
        assert_eq!(config.general.refresh_interval_ms, 1000);
    }
}
