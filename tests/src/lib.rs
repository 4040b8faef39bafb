//! Shared fixtures for the end-to-end tests

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use health_assistant::{Config, StoreConfig};
use medi_predict::Condition;

/// The demo model directory shipped at the workspace root
pub fn shipped_models_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("saved_models")
}

/// Copy the shipped model files for `conditions` into `dir`
pub fn copy_models(dir: &Path, conditions: &[Condition]) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    for condition in conditions {
        let file = condition.model_file();
        fs::copy(shipped_models_dir().join(file), dir.join(file))?;
    }
    Ok(())
}

pub fn config_for(model_dir: &Path, store: StoreConfig) -> Config {
    Config {
        model_dir: model_dir.to_path_buf(),
        store,
        ..Config::default()
    }
}

/// Join answers into a script, one per line
pub fn script(lines: &[&str]) -> String {
    let mut s = lines.join("\n");
    s.push('\n');
    s
}

pub const ANN: [&str; 3] = ["Ann", "ann@gmail.com", "password1"];
pub const NON_DIABETIC_ROW: [&str; 8] = ["2", "120", "70", "20", "80", "25.0", "0.5", "33"];
pub const DIABETIC_ROW: [&str; 8] = ["8", "197", "70", "35", "0", "45.0", "0.6", "50"];
