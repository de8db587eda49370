// src/engine/signals.rs

//! OS signal subscription.
//!
//! The listener task only trips the [`ShutdownGate`] and writes one log
//! record. Anything touching files stays on the poll loop.

use std::io;

use tokio::task::JoinHandle;
use tracing::warn;

use super::gate::ShutdownGate;

/// Register SIGINT / SIGTERM handlers (Ctrl-C on Windows) and spawn a task
/// that trips `gate` on the first one received.
///
/// Handlers are installed before this returns, so a signal arriving before
/// the task first runs is still delivered to it instead of killing the
/// process.
pub fn spawn_signal_listener(gate: ShutdownGate) -> io::Result<JoinHandle<()>> {
    let mut signals = ExitSignals::register()?;
    Ok(tokio::spawn(async move {
        let signal = signals.recv().await;
        warn!(signal, "Received Exit Signal: {signal}");
        gate.trip();
    }))
}

#[cfg(unix)]
struct ExitSignals {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl ExitSignals {
    fn register() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    async fn recv(&mut self) -> &'static str {
        tokio::select! {
            _ = self.interrupt.recv() => "SIGINT",
            _ = self.terminate.recv() => "SIGTERM",
        }
    }
}

#[cfg(windows)]
struct ExitSignals {
    ctrl_c: tokio::signal::windows::CtrlC,
}

#[cfg(windows)]
impl ExitSignals {
    fn register() -> io::Result<Self> {
        Ok(Self {
            ctrl_c: tokio::signal::windows::ctrl_c()?,
        })
    }

    async fn recv(&mut self) -> &'static str {
        self.ctrl_c.recv().await;
        "SIGINT"
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::process::Command;
    use std::time::Duration;

    #[tokio::test]
    async fn sigterm_sent_before_the_task_runs_trips_the_gate() {
        let gate = ShutdownGate::new();
        let _handle = spawn_signal_listener(gate.clone()).unwrap();

        // The listener task has not been polled yet on this current-thread
        // runtime; the handler must already be in place.
        let status = Command::new("kill")
            .args(["-TERM", &std::process::id().to_string()])
            .status()
            .unwrap();
        assert!(status.success());

        tokio::time::timeout(Duration::from_secs(5), gate.tripped())
            .await
            .unwrap();
        assert!(gate.is_tripped());
    }
}
