//! Terminal front-end for the Health Assistant.
//!
//! Reads `health_assistant.toml`, loads the condition models at startup and
//! runs the Login / Sign Up / prediction pages as a line-driven session.

pub mod about;
pub mod config;
pub mod form;
pub mod startup;

pub use config::{load_config, Config, ConfigError, StoreConfig};
pub use form::{run_script, FormSession, Step};
pub use startup::{build_gate, load_dispatchers, AppError};

/// Build a ready session from configuration. Model load failures are fatal.
pub fn open_session(config: &Config) -> Result<FormSession, AppError> {
    let dispatchers = load_dispatchers(config)?;
    let gate = build_gate(config)?;
    Ok(FormSession::new(gate, dispatchers))
}
