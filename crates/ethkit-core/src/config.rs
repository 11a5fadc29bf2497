//! YAML configuration.
//!
//! Loads `~/.ethkit/config.yaml` (or an explicit path) into [`Config`].
//! Every field has a default, so an absent default file is not an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RPC endpoint used when nothing else is configured.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// Name of the data directory under the user's home.
const DATA_DIR_NAME: &str = ".ethkit";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not determine home directory")]
    NoHomeDir,
}

/// Parsed configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// JSON-RPC endpoint URL.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// Directory holding V3 keystore files.
    #[serde(default = "default_keystore_dir")]
    pub keystore_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            keystore_dir: default_keystore_dir(),
        }
    }
}

impl Config {
    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load config from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load config from `path`, or from the default location.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let default_path = default_config_path()?;
        if default_path.exists() {
            Self::from_file(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Returns `~/.ethkit`.
pub fn default_data_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(DATA_DIR_NAME))
}

/// Returns `~/.ethkit/config.yaml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(default_data_dir()?.join("config.yaml"))
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}

fn default_keystore_dir() -> PathBuf {
    default_data_dir()
        .unwrap_or_else(|_| PathBuf::from(DATA_DIR_NAME))
        .join("keystore")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn full_yaml() {
        let yaml = r#"
rpc_url: "https://mainnet.example.org"
keystore_dir: "/tmp/ethkit-keys"
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.rpc_url, "https://mainnet.example.org");
        assert_eq!(config.keystore_dir, PathBuf::from("/tmp/ethkit-keys"));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = Config::from_yaml("rpc_url: http://node:8545\n").unwrap();
        assert_eq!(config.rpc_url, "http://node:8545");
        assert!(config.keystore_dir.ends_with("keystore"));

        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
    }

    #[test]
    fn invalid_yaml_rejected() {
        let result = Config::from_yaml("rpc_url: [unterminated");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn load_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        let config = Config {
            rpc_url: "http://10.0.0.1:8545".into(),
            keystore_dir: dir.path().join("keys"),
        };
        std::fs::write(&path, config.to_yaml().unwrap()).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_missing_explicit_path_fails() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(&dir.path().join("nope.yaml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
