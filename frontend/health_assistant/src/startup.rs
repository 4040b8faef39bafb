//! Wiring from configuration to a ready gate and dispatcher set

use medi_gate::{FileUserStore, SessionGate, StoreError};
use medi_predict::{Condition, DispatcherSet, ModelLoadError};
use thiserror::Error;

use crate::config::{Config, ConfigError, StoreConfig};

/// Exit code for usage and configuration errors
pub const EXIT_USAGE: i32 = 1;
/// Exit code for a fatal model load failure
pub const EXIT_MODEL_LOAD: i32 = 2;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot open user store: {0}")]
    Store(#[from] StoreError),
    #[error("{0}. Ensure all models are in the model directory.")]
    ModelLoad(#[from] ModelLoadError),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ModelLoad(_) => EXIT_MODEL_LOAD,
            AppError::Config(_) | AppError::Store(_) => EXIT_USAGE,
        }
    }
}

/// Conditions whose models must be present for this configuration
pub fn required_conditions(config: &Config) -> Vec<Condition> {
    Condition::ALL
        .into_iter()
        .filter(|c| *c != Condition::Parkinsons || config.parkinsons)
        .collect()
}

pub fn build_gate(config: &Config) -> Result<SessionGate, AppError> {
    let gate = match &config.store {
        StoreConfig::Memory => SessionGate::in_memory(),
        StoreConfig::File { path } => {
            log::info!("using file user store at {}", path.display());
            SessionGate::with_store(Box::new(FileUserStore::new(path)?))
        }
    };
    Ok(gate)
}

pub fn load_dispatchers(config: &Config) -> Result<DispatcherSet, AppError> {
    let conditions = required_conditions(config);
    let set = DispatcherSet::load(&config.model_dir, &conditions)?;
    log::info!(
        "{} model(s) ready from {}",
        set.len(),
        config.model_dir.display()
    );
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parkinsons_is_opt_in() {
        let mut cfg = Config::default();
        assert_eq!(
            required_conditions(&cfg),
            vec![Condition::Diabetes, Condition::HeartDisease]
        );
        cfg.parkinsons = true;
        assert_eq!(required_conditions(&cfg), Condition::ALL.to_vec());
    }

    #[test]
    fn missing_models_exit_with_load_code() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = Config {
            model_dir: tmp.path().join("saved_models"),
            ..Config::default()
        };
        let err = load_dispatchers(&cfg).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_MODEL_LOAD);
        assert!(err.to_string().contains("diabetes_model.json"));
    }

    #[test]
    fn file_store_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("users");
        let cfg = Config {
            store: StoreConfig::File { path: dir.clone() },
            model_dir: PathBuf::from("unused"),
            ..Config::default()
        };
        let gate = build_gate(&cfg).unwrap();
        assert_eq!(gate.store().backend_name(), "file");
        assert!(dir.is_dir());
    }
}
