use std::path::Path;

use anyhow::{Context, Result};

use tracing::{debug, info};

pub mod model;

pub use model::*;

impl Config {
    /// Load configuration from a specific file path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        debug!("Configuration loaded and validated successfully");

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load_default() -> Result<Self> {
        use directories::ProjectDirs;

        if let Some(proj_dirs) = ProjectDirs::from("com", "dockhand", "dockhand") {
            let config_path = proj_dirs.config_dir().join("config.toml");

            if config_path.exists() {
                return Self::load(&config_path);
            }
        }

        // Try current directory
        let local_config = std::path::PathBuf::from("config.toml");
        if local_config.exists() {
            return Self::load(&local_config);
        }

        info!("No configuration file found, using defaults");
        Ok(Config::default())
    }

    /// Save configuration to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        info!("Saving configuration to: {}", path.display());

        let contents = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.general.refresh_interval_ms < 100 {
            anyhow::bail!("refresh_interval_ms must be at least 100");
        }

        if self.docker.command.trim().is_empty() {
            anyhow::bail!("docker.command must not be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.refresh_interval_ms, 1000);
        assert_eq!(config.docker.command, "docker");
    }

    #[test]
    fn test_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());

        let invalid_config = Config {
            general: GeneralConfig {
                refresh_interval_ms: 50, // Too low
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(invalid_config.validate().is_err());

        let invalid_config = Config {
            docker: DockerConfig {
                command: "  ".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(invalid_config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let config = Config {
            docker: DockerConfig {
                command: "podman".to_string(),
                command_prefix: vec!["flatpak-spawn".to_string(), "--host".to_string()],
            },
            ..Default::default()
        };
        let temp_file = NamedTempFile::new().unwrap();

        config.save(temp_file.path()).unwrap();

        let loaded = Config::load(temp_file.path()).unwrap();
        assert_eq!(loaded.docker.command, "podman");
        assert_eq!(loaded.docker.command_prefix.len(), 2);
    }
}
