// src/config/validate.rs

use crate::config::model::WatchConfig;
use crate::errors::{DirwatchError, Result};

/// Run basic semantic validation against a watch config.
///
/// This checks:
/// - the poll interval is non-zero
/// - the magic string is not empty (it would match every line)
///
/// It does **not** check that the directory exists; a missing directory is
/// reported per poll, since it may appear later.
pub fn validate_config(cfg: &WatchConfig) -> Result<()> {
    if cfg.interval.is_zero() {
        return Err(DirwatchError::ConfigError(
            "interval must be >= 1 second (got 0)".to_string(),
        ));
    }

    if cfg.magic.is_empty() {
        return Err(DirwatchError::ConfigError(
            "magic string must not be empty".to_string(),
        ));
    }

    Ok(())
}
