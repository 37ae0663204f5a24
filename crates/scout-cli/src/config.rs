//! Configuration file management for the CLI.

use crate::error::{CliError, Result};
use scout_pipeline::ScoutConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the platform config dir holding the config file.
const APP_DIR: &str = "signal-scout";

/// File name of the config file.
const FILE_NAME: &str = "config.toml";

/// Pipeline configuration together with the file it lives in.
#[derive(Debug, Clone)]
pub struct Config {
    /// File the configuration was loaded from or will be saved to
    pub path: PathBuf,

    /// Pipeline settings
    pub scout: ScoutConfig,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Could not find config directory".into()))?;
        Ok(dir.join(APP_DIR).join(FILE_NAME))
    }

    /// Resolve an explicit path or fall back to the default one.
    pub fn resolve(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration from file.
    ///
    /// A missing default file yields the built-in defaults; a missing
    /// explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = Self::resolve(explicit)?;

        if !path.exists() {
            if explicit.is_some() {
                return Err(CliError::Config(format!(
                    "Config file '{}' does not exist",
                    path.display()
                )));
            }
            return Ok(Self {
                path,
                scout: ScoutConfig::default(),
            });
        }

        let contents = fs::read_to_string(&path)?;
        let scout: ScoutConfig = toml::from_str(&contents)?;
        scout.validate()?;
        Ok(Self { path, scout })
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(&self.scout)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Write a default configuration file.
    pub fn init(explicit: Option<&Path>, force: bool) -> Result<Self> {
        let path = Self::resolve(explicit)?;
        if path.exists() && !force {
            return Err(CliError::Config(format!(
                "Config file '{}' already exists (use --force to overwrite)",
                path.display()
            )));
        }

        let config = Self {
            path,
            scout: ScoutConfig::default(),
        };
        config.save()?;
        Ok(config)
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(self.scout.to_toml()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let written = Config::init(Some(&path), false).unwrap();
        assert!(path.exists());

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.scout, written.scout);
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "per_source_cap = 3\n").unwrap();

        assert!(matches!(
            Config::init(Some(&path), false),
            Err(CliError::Config(_))
        ));

        Config::init(Some(&path), true).unwrap();
        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.scout.per_source_cap, None);
    }

    #[test]
    fn test_partial_file_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "per_source_cap = 3\n\n[shortlist]\ndaily_top_n = 5\n").unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.scout.per_source_cap, Some(3));
        assert_eq!(loaded.scout.dedup_config().per_source_cap, 3);
        assert_eq!(loaded.scout.shortlist.daily_top_n, 5);
        assert!(!loaded.scout.topic_lattice.is_empty());
    }

    #[test]
    fn test_dedup_section_cap_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[dedup]\nper_source_cap = 3\n").unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.scout.dedup_config().per_source_cap, 3);
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(Config::load(Some(&path)), Err(CliError::Config(_))));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "per_source_cap = 0\n").unwrap();
        assert!(matches!(Config::load(Some(&path)), Err(CliError::Scout(_))));

        fs::write(&path, "[dedup]\nper_source_cap = 0\n").unwrap();
        assert!(matches!(Config::load(Some(&path)), Err(CliError::Scout(_))));

        fs::write(&path, "per_source_cap = \"ten\"\n").unwrap();
        assert!(matches!(Config::load(Some(&path)), Err(CliError::Toml(_))));
    }
}
