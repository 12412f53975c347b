//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::WalletConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Config file name probed by [`load_or_default`] in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "regen-wallet.toml";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for the schema.
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The config parsed but failed semantic validation.
    #[error("invalid configuration: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<WalletConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: WalletConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::info!(
        path = %path.display(),
        chain_id = config.chain.chain_id,
        max_attempts = config.connect.max_attempts,
        "Configuration loaded"
    );

    Ok(config)
}

/// Load `regen-wallet.toml` from the working directory if present, falling
/// back to built-in defaults (Base Sepolia, 3 attempts) otherwise.
///
/// A file that exists but fails to parse or validate is still an error; the
/// fallback only covers the file being absent.
pub fn load_or_default() -> Result<WalletConfig, ConfigError> {
    let path = Path::new(DEFAULT_CONFIG_FILE);
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(
            file = DEFAULT_CONFIG_FILE,
            "No config file found, using built-in defaults"
        );
        Ok(WalletConfig::default())
    }
}
