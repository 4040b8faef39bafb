use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE: &str = "health_assistant.toml";
pub const DEFAULT_MODEL_DIR: &str = "saved_models";
pub const DEFAULT_USER_DIR: &str = "users";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Application settings read from `health_assistant.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub model_dir: PathBuf,
    /// Load and offer the Parkinson's model
    pub parkinsons: bool,
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from(DEFAULT_MODEL_DIR),
            parkinsons: false,
            store: StoreConfig::Memory,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoreConfig {
    /// Users live as long as the process
    #[default]
    Memory,
    /// One JSON file per user under `path`
    File {
        #[serde(default = "default_user_dir")]
        path: PathBuf,
    },
}

fn default_user_dir() -> PathBuf {
    PathBuf::from(DEFAULT_USER_DIR)
}

pub fn parse_config(text: &str, path: &Path) -> Result<Config, ConfigError> {
    toml::from_str::<Config>(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load settings from `path`.
///
/// A missing file yields defaults unless `required` is set.
pub fn load_config(path: &Path, required: bool) -> Result<Config, ConfigError> {
    match fs::read_to_string(path) {
        Ok(text) => parse_config(&text, path),
        Err(e) if e.kind() == ErrorKind::NotFound && !required => {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_config_is_default() {
        let cfg = parse_config("", Path::new("x.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn full_config() {
        let text = r#"
model_dir = "models"
parkinsons = true

[store]
kind = "file"
path = "/var/lib/health/users"
"#;
        let cfg = parse_config(text, Path::new("x.toml")).unwrap();
        assert_eq!(
            cfg,
            Config {
                model_dir: PathBuf::from("models"),
                parkinsons: true,
                store: StoreConfig::File {
                    path: PathBuf::from("/var/lib/health/users")
                },
            }
        );
    }

    #[test]
    fn file_store_path_defaults() {
        let cfg = parse_config("[store]\nkind = \"file\"\n", Path::new("x.toml")).unwrap();
        assert_eq!(
            cfg.store,
            StoreConfig::File {
                path: PathBuf::from("users")
            }
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_config("modeldir = \"x\"\n", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(parse_config("[store]\nkind = \"redis\"\n", Path::new("x.toml")).is_err());
    }

    #[test]
    fn missing_file_handling() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        assert_eq!(load_config(&path, false).unwrap(), Config::default());
        assert!(matches!(
            load_config(&path, true),
            Err(ConfigError::Io { .. })
        ));
    }
}
