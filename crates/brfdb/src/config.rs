//! Configuration file support for brfdb
//!
//! Loads and validates settings from a TOML file.
//! Default location: /etc/brfdb/brfdb.toml

use crate::error::{BrfdbError, Result};
use crate::sysfs::{SysfsLayout, SYS_CLASS_NET};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file location.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/brfdb/brfdb.toml";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Sysfs configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SysfsConfig {
    /// Directory holding one entry per network device
    #[serde(default = "default_sysfs_root")]
    pub root: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default log level when neither the command line nor RUST_LOG sets one
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Complete brfdb configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrfdbConfig {
    #[serde(default)]
    pub sysfs: SysfsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_sysfs_root() -> PathBuf {
    PathBuf::from(SYS_CLASS_NET)
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SysfsConfig {
    fn default() -> Self {
        Self {
            root: default_sysfs_root(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl BrfdbConfig {
    /// Load configuration from file, falling back to defaults if file not found
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(content) => {
                let config: Self = toml::from_str(&content).map_err(|e| {
                    BrfdbError::Config(format!(
                        "Failed to parse config file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                config.validate()?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(BrfdbError::Io(e)),
        }
    }

    /// Sysfs layout described by this configuration
    pub fn layout(&self) -> SysfsLayout {
        SysfsLayout::new(self.sysfs.root.clone())
    }

    /// Log filter directive to use.
    ///
    /// The command line wins over `RUST_LOG`, which wins over the
    /// configured level. An empty `RUST_LOG` counts as unset.
    pub fn log_directive(&self, cli_level: Option<&str>, env_filter: Option<&str>) -> String {
        cli_level
            .or(env_filter.filter(|env| !env.trim().is_empty()))
            .unwrap_or(self.logging.level.as_str())
            .to_string()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.sysfs.root.as_os_str().is_empty() {
            return Err(BrfdbError::Config(
                "sysfs.root must not be empty".to_string(),
            ));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(BrfdbError::Config(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BrfdbConfig::default();
        assert_eq!(config.sysfs.root, PathBuf::from("/sys/class/net"));
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_layout_uses_root() {
        let mut config = BrfdbConfig::default();
        config.sysfs.root = PathBuf::from("/srv/sys");
        assert_eq!(
            config.layout().ports_dir("br0"),
            PathBuf::from("/srv/sys/br0/brif")
        );
    }

    #[test]
    fn test_toml_deserialization_partial() {
        let toml_str = r#"
[sysfs]
root = "/tmp/sysfs"
"#;
        let config: BrfdbConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sysfs.root, PathBuf::from("/tmp/sysfs"));
        // Unspecified values should use defaults
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_validate_empty_root() {
        let mut config = BrfdbConfig::default();
        config.sysfs.root = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_unknown_level() {
        let mut config = BrfdbConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        config.logging.level = "DEBUG".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_directive_precedence() {
        let mut config = BrfdbConfig::default();
        assert_eq!(config.log_directive(None, None), "warn");

        config.logging.level = "info".to_string();
        assert_eq!(config.log_directive(None, None), "info");
        assert_eq!(config.log_directive(None, Some("")), "info");
        assert_eq!(config.log_directive(None, Some("brfdb=trace")), "brfdb=trace");
        assert_eq!(config.log_directive(Some("debug"), Some("brfdb=trace")), "debug");
        assert_eq!(config.log_directive(Some("error"), None), "error");
    }

    #[test]
    fn test_load_nonexistent_file_defaults() {
        let config = BrfdbConfig::load_or_default("/nonexistent/brfdb.toml").unwrap();
        assert_eq!(config.sysfs.root, PathBuf::from("/sys/class/net"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("brfdb.toml");
        fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let config = BrfdbConfig::load_or_default(&path).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.sysfs.root, PathBuf::from("/sys/class/net"));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("brfdb.toml");
        fs::write(&path, "[sysfs\nroot = ").unwrap();

        let err = BrfdbConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, BrfdbError::Config(_)));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("brfdb.toml");
        fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

        assert!(BrfdbConfig::load_or_default(&path).is_err());
    }
}
