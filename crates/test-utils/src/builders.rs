#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use dirwatch::config::WatchConfig;

/// Builder for `WatchConfig` to simplify test setup.
///
/// Defaults: magic `"magic"`, no extension filter, 10ms interval so loop
/// tests finish quickly.
pub struct WatchConfigBuilder {
    config: WatchConfig,
}

impl WatchConfigBuilder {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            config: WatchConfig {
                dir: dir.as_ref().to_path_buf(),
                magic: "magic".to_string(),
                ext: None,
                interval: Duration::from_millis(10),
            },
        }
    }

    pub fn magic(mut self, magic: &str) -> Self {
        self.config.magic = magic.to_string();
        self
    }

    pub fn ext(mut self, ext: &str) -> Self {
        self.config.ext = Some(ext.to_string());
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.config.interval = interval;
        self
    }

    pub fn build(self) -> WatchConfig {
        dirwatch::config::validate_config(&self.config)
            .expect("Failed to build valid config from builder");
        self.config
    }
}

impl Default for WatchConfigBuilder {
    fn default() -> Self {
        Self::new(PathBuf::from("/watch"))
    }
}
