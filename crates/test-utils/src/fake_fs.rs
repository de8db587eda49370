use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use dirwatch::engine::ShutdownGate;
use dirwatch::fs::mock::MockFileSystem;
use dirwatch::fs::{FileIdentity, FileSystem};

/// A filesystem that:
/// - serves everything from an inner `MockFileSystem`
/// - trips a `ShutdownGate` the first time a chosen file is opened,
///   standing in for a signal delivered mid-scan.
#[derive(Debug)]
pub struct GateTrippingFs {
    inner: MockFileSystem,
    gate: ShutdownGate,
    trigger: PathBuf,
}

impl GateTrippingFs {
    pub fn new(inner: MockFileSystem, gate: ShutdownGate, trigger: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            gate,
            trigger: trigger.into(),
        }
    }
}

impl FileSystem for GateTrippingFs {
    fn open_read(&self, path: &Path) -> Result<Box<dyn Read + Send>> {
        if path == self.trigger.as_path() {
            self.gate.trip();
        }
        self.inner.open_read(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner.is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn identity(&self, path: &Path) -> Option<FileIdentity> {
        self.inner.identity(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.inner.read_dir(path)
    }
}

/// A filesystem whose directory listing fails with an unexpected error a
/// fixed number of times before delegating to the inner mock.
#[derive(Debug)]
pub struct FlakyListingFs {
    inner: MockFileSystem,
    failures_left: Arc<AtomicUsize>,
}

impl FlakyListingFs {
    pub fn new(inner: MockFileSystem, failures: usize) -> Self {
        Self {
            inner,
            failures_left: Arc::new(AtomicUsize::new(failures)),
        }
    }
}

impl FileSystem for FlakyListingFs {
    fn open_read(&self, path: &Path) -> Result<Box<dyn Read + Send>> {
        self.inner.open_read(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner.is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn identity(&self, path: &Path) -> Option<FileIdentity> {
        self.inner.identity(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let left = self.failures_left.load(Ordering::SeqCst);
        if left > 0 {
            self.failures_left.store(left - 1, Ordering::SeqCst);
            return Err(anyhow!("simulated listing failure for {:?}", path));
        }
        self.inner.read_dir(path)
    }
}
