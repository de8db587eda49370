// src/engine/poll_loop.rs

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::{Duration, Instant};

use jiff::Zoned;
use tracing::{debug, error, info};

use crate::config::WatchConfig;
use crate::fs::FileSystem;
use crate::watch::{PassReport, Reconciler, ScanLedger};

use super::banner::{shutdown_banner, startup_banner};
use super::gate::ShutdownGate;

const PROGRAM: &str = env!("CARGO_PKG_NAME");

/// What the loop leaves behind once it stops.
#[derive(Debug)]
pub struct PollSummary {
    /// Passes started (successful or not).
    pub passes: u64,
    /// Passes that ended in an error or panic.
    pub failed_passes: u64,
    /// Ledger state after the final pass.
    pub ledger: ScanLedger,
    pub uptime: Duration,
}

/// Async shell around [`Reconciler`]: runs one pass, sleeps for the
/// configured interval, repeats until the [`ShutdownGate`] trips.
///
/// The gate is checked only at the top of each iteration, so a pass in
/// progress always completes. No error or panic from a pass escapes the
/// loop.
#[derive(Debug)]
pub struct PollLoop {
    cfg: WatchConfig,
    reconciler: Reconciler,
    gate: ShutdownGate,
}

impl PollLoop {
    pub fn new(cfg: WatchConfig, fs: Arc<dyn FileSystem>, gate: ShutdownGate) -> Self {
        let reconciler = Reconciler::new(fs, &cfg);
        Self {
            cfg,
            reconciler,
            gate,
        }
    }

    pub async fn run(mut self) -> PollSummary {
        let started = Zoned::now();
        let clock = Instant::now();
        info!("{}", startup_banner(PROGRAM, &started));
        info!(
            dir = %self.cfg.dir.display(),
            ext = ?self.cfg.ext,
            interval = ?self.cfg.interval,
            "Watching {} for \"{}\" now.",
            self.cfg.dir.display(),
            self.cfg.magic
        );

        let mut passes = 0u64;
        let mut failed_passes = 0u64;

        while !self.gate.is_tripped() {
            passes += 1;
            if self.poll_once().is_none() {
                failed_passes += 1;
            }

            // No drift compensation: always the full interval after a pass.
            tokio::select! {
                _ = tokio::time::sleep(self.cfg.interval) => {}
                _ = self.gate.tripped() => {
                    debug!("sleep cut short by shutdown request");
                }
            }
        }

        let uptime = clock.elapsed();
        info!("{}", shutdown_banner(PROGRAM, uptime));

        PollSummary {
            passes,
            failed_passes,
            ledger: self.reconciler.into_ledger(),
            uptime,
        }
    }

    /// Run a single pass, logging any failure. Returns `None` if the pass
    /// did not complete.
    pub fn poll_once(&mut self) -> Option<PassReport> {
        let reconciler = &mut self.reconciler;
        match catch_unwind(AssertUnwindSafe(|| reconciler.pass())) {
            Ok(Ok(report)) => Some(report),
            Ok(Err(err)) if err.is_transient() => {
                error!("{err}");
                None
            }
            Ok(Err(err)) => {
                error!(error = ?err, "unexpected error during poll: {err}");
                None
            }
            Err(payload) => {
                error!("poll pass panicked: {}", panic_message(payload.as_ref()));
                None
            }
        }
    }

    pub fn ledger(&self) -> &ScanLedger {
        self.reconciler.ledger()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    }
}
