// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod watch;

use std::sync::Arc;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::WatchConfig;
use crate::engine::{spawn_signal_listener, PollLoop, ShutdownGate};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config from CLI args
/// - the real filesystem
/// - SIGINT / SIGTERM handling
/// - the poll loop
///
/// Returns once a signal has stopped the loop, or early if the signal
/// handlers cannot be installed.
pub async fn run(args: CliArgs) -> Result<()> {
    let mut cfg = WatchConfig::from_cli(&args)?;
    // Resolve once so error records and later cwd changes agree.
    cfg.dir = cfg.resolved_dir();

    let gate = ShutdownGate::new();
    let _signals = spawn_signal_listener(gate.clone())?;

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let summary = PollLoop::new(cfg, fs, gate).run().await;

    debug!(
        passes = summary.passes,
        failed_passes = summary.failed_passes,
        tracked_files = summary.ledger.len(),
        "poll loop finished"
    );
    Ok(())
}
