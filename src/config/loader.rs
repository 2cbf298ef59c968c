//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{message, ConfigError, Result};

use super::PlayerConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns `ConfigError::IoError` if the file cannot be read, otherwise
/// whatever [`parse_config`] rejects.
///
/// # Example
///
/// ```rust,ignore
/// use stepper_singer::load_config;
///
/// let config = load_config("player.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PlayerConfig> {
    let content = fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::IoError(message(&e.to_string())))?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns `ConfigError::ParseError` for malformed TOML or unknown values
/// (for example a misspelled `step_mode`), and the validation errors of
/// [`validate_config`](super::validate_config). Missing keys take their
/// defaults.
pub fn parse_config(content: &str) -> Result<PlayerConfig> {
    let config: PlayerConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(message(e.message())))?;

    super::validation::validate_config(&config)?;
    Ok(config)
}
