// src/config/model.rs

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::CliArgs;
use crate::config::validate::validate_config;
use crate::errors::Result;

/// Immutable watch settings, fixed once at startup.
///
/// Built from the command line:
///
/// ```text
/// dirwatch ./inbox "magic" --ext .txt --interval 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    /// Directory whose immediate entries are polled.
    pub dir: PathBuf,

    /// Magic substring, as given by the user. Matching is case-insensitive;
    /// use [`WatchConfig::magic_lower`] when comparing.
    pub magic: String,

    /// Suffix filter for file names. `None` means every entry qualifies.
    pub ext: Option<String>,

    /// Sleep between polls. Always non-zero once validated.
    pub interval: Duration,
}

impl WatchConfig {
    /// Build and validate a config from parsed CLI arguments.
    pub fn from_cli(args: &CliArgs) -> Result<Self> {
        let cfg = Self {
            dir: PathBuf::from(&args.path),
            magic: args.magic.clone(),
            // `--ext ""` is the same as no filter.
            ext: args.ext.clone().filter(|e| !e.is_empty()),
            interval: Duration::from_secs(args.interval),
        };
        validate_config(&cfg)?;
        Ok(cfg)
    }

    pub fn magic_lower(&self) -> String {
        self.magic.to_lowercase()
    }

    /// Watched directory resolved against the current working directory,
    /// so error records show where we actually looked.
    pub fn resolved_dir(&self) -> PathBuf {
        absolute_or_self(&self.dir)
    }
}

fn absolute_or_self(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
