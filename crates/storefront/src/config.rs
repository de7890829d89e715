//! Environment-driven configuration.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `SHANGA_CATALOG_PATH` | JSON catalog snapshot to serve | built-in seed catalog |
//! | `SHANGA_LOG_FORMAT` | `json` or `text` | `json` |
//!
//! Log filtering itself is `RUST_LOG`, handled by `shanga-observability`.

use std::path::PathBuf;

use thiserror::Error;

use shanga_observability::LogFormat;

pub const CATALOG_PATH_VAR: &str = "SHANGA_CATALOG_PATH";
pub const LOG_FORMAT_VAR: &str = "SHANGA_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is set but empty")]
    Empty { var: &'static str },

    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StorefrontConfig {
    /// `None` serves the seed catalog.
    pub catalog_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = match lookup(CATALOG_PATH_VAR) {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::Empty {
                    var: CATALOG_PATH_VAR,
                });
            }
            Some(path) => Some(PathBuf::from(path)),
            None => None,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse().map_err(|reason| ConfigError::Invalid {
                var: LOG_FORMAT_VAR,
                reason,
            })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            catalog_path,
            log_format,
        })
    }
}
