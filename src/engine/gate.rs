// src/engine/gate.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Process-wide "please stop" flag.
///
/// Starts open; [`ShutdownGate::trip`] closes it for good. The poll loop
/// reads the flag once per iteration and never mid-pass. Clones share the
/// same flag, so the signal listener and the loop each hold one.
#[derive(Debug, Clone, Default)]
pub struct ShutdownGate {
    inner: Arc<GateInner>,
}

#[derive(Debug, Default)]
struct GateInner {
    tripped: AtomicBool,
    // Wakes a sleeping poll loop early. Not consulted for the decision
    // itself; only `tripped` is.
    wake: Notify,
}

impl ShutdownGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trip the gate. Returns `true` only for the call that actually
    /// changed it; later calls are no-ops.
    pub fn trip(&self) -> bool {
        let first = !self.inner.tripped.swap(true, Ordering::AcqRel);
        if first {
            self.inner.wake.notify_one();
        }
        first
    }

    pub fn is_tripped(&self) -> bool {
        self.inner.tripped.load(Ordering::Acquire)
    }

    /// Resolve once the gate has been tripped.
    pub async fn tripped(&self) {
        if self.is_tripped() {
            return;
        }
        self.inner.wake.notified().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn trips_exactly_once() {
        let gate = ShutdownGate::new();
        assert!(!gate.is_tripped());
        assert!(gate.trip());
        assert!(!gate.trip());
        assert!(gate.is_tripped());
    }

    #[test]
    fn clones_share_the_flag() {
        let gate = ShutdownGate::new();
        let other = gate.clone();
        other.trip();
        assert!(gate.is_tripped());
    }

    #[tokio::test]
    async fn tripped_wakes_a_waiter() {
        let gate = ShutdownGate::new();
        let waiter = {
            let gate = gate.clone();
            tokio::spawn(async move { gate.tripped().await })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        gate.trip();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should wake")
            .unwrap();
    }

    #[tokio::test]
    async fn tripped_returns_immediately_when_already_set() {
        let gate = ShutdownGate::new();
        gate.trip();
        tokio::time::timeout(Duration::from_millis(100), gate.tripped())
            .await
            .expect("already tripped");
    }
}
