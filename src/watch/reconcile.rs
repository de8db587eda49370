// src/watch/reconcile.rs

//! Per-poll reconciliation of the directory against the scan ledger.
//!
//! This is the synchronous core of dirwatch: one call to
//! [`Reconciler::pass`] performs a full poll (snapshot, removals, additions,
//! rescans) and returns a [`PassReport`] describing what happened. It has no
//! timers and no signal handling; the async poll loop drives it.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::WatchConfig;
use crate::errors::Result;
use crate::fs::{FileIdentity, FileSystem};
use crate::watch::ledger::ScanLedger;
use crate::watch::scanner::scan_file;
use crate::watch::snapshot::DirectorySnapshot;

/// One reported magic-string occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicMatch {
    pub file: String,
    pub line: usize,
}

/// Everything one pass observed, in the order it was processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    pub removed: Vec<String>,
    pub added: Vec<String>,
    pub matches: Vec<MagicMatch>,
    /// Files that could not be read this pass; their watermark is untouched.
    pub skipped: Vec<String>,
}

impl PassReport {
    /// Matches reported for a single file, in line order.
    pub fn lines_for(&self, file: &str) -> Vec<usize> {
        self.matches
            .iter()
            .filter(|m| m.file == file)
            .map(|m| m.line)
            .collect()
    }
}

#[derive(Debug)]
pub struct Reconciler {
    fs: Arc<dyn FileSystem>,
    dir: PathBuf,
    magic_lower: String,
    ext: Option<String>,
    ledger: ScanLedger,
    /// Identity of each tracked file when it was first seen, used to notice
    /// a file replaced under the same name between two polls.
    identities: HashMap<String, FileIdentity>,
}

impl Reconciler {
    pub fn new(fs: Arc<dyn FileSystem>, cfg: &WatchConfig) -> Self {
        Self {
            fs,
            dir: cfg.dir.clone(),
            magic_lower: cfg.magic_lower(),
            ext: cfg.ext.clone(),
            ledger: ScanLedger::new(),
            identities: HashMap::new(),
        }
    }

    pub fn ledger(&self) -> &ScanLedger {
        &self.ledger
    }

    pub fn into_ledger(self) -> ScanLedger {
        self.ledger
    }

    /// Run one poll.
    ///
    /// Order matters: removals are applied before additions so a file that
    /// was deleted and re-created under the same name between polls starts
    /// again from watermark 0.
    ///
    /// Returns an error only when the watched directory cannot be listed;
    /// in that case the ledger is left exactly as it was.
    pub fn pass(&mut self) -> Result<PassReport> {
        let snapshot = DirectorySnapshot::take(self.fs.as_ref(), &self.dir, self.ext.as_deref())?;
        let mut report = PassReport::default();

        self.detect_removed(&snapshot, &mut report);
        self.detect_added(&snapshot, &mut report);
        self.rescan_tracked(&snapshot, &mut report);

        debug!(
            files = snapshot.len(),
            added = report.added.len(),
            removed = report.removed.len(),
            matches = report.matches.len(),
            skipped = report.skipped.len(),
            "poll pass complete"
        );
        Ok(report)
    }

    /// A tracked file counts as deleted when it is missing from the snapshot
    /// or when the name now points at a different file.
    fn detect_removed(&mut self, snapshot: &DirectorySnapshot, report: &mut PassReport) {
        let gone: Vec<String> = self
            .ledger
            .iter()
            .map(|(name, _)| name)
            .filter(|name| !snapshot.contains(name) || self.was_replaced(name))
            .map(str::to_string)
            .collect();

        for name in gone {
            self.ledger.remove(&name);
            self.identities.remove(&name);
            info!(file = %name, "file deleted: {name}");
            report.removed.push(name);
        }
    }

    fn was_replaced(&self, name: &str) -> bool {
        let Some(known) = self.identities.get(name) else {
            return false;
        };
        match self.fs.identity(&self.dir.join(name)) {
            Some(current) => current != *known,
            None => false,
        }
    }

    fn detect_added(&mut self, snapshot: &DirectorySnapshot, report: &mut PassReport) {
        for name in snapshot.names() {
            if self.ledger.contains(name) {
                continue;
            }
            self.ledger.set(name, 0);
            if let Some(id) = self.fs.identity(&self.dir.join(name)) {
                self.identities.insert(name.clone(), id);
            }
            info!(file = %name, "new file detected: {name}");
            report.added.push(name.clone());
            self.scan_one(name, report);
        }
    }

    fn rescan_tracked(&mut self, snapshot: &DirectorySnapshot, report: &mut PassReport) {
        for name in snapshot.names() {
            if self.ledger.contains(name) {
                self.scan_one(name, report);
            }
        }
    }

    fn scan_one(&mut self, name: &str, report: &mut PassReport) {
        let watermark = self.ledger.get(name).unwrap_or(0);
        match scan_file(self.fs.as_ref(), &self.dir, name, &self.magic_lower, watermark) {
            Ok(outcome) => {
                self.ledger.set(name, outcome.watermark);
                report
                    .matches
                    .extend(outcome.new_matches.into_iter().map(|line| MagicMatch {
                        file: name.to_string(),
                        line,
                    }));
            }
            Err(err) => {
                debug!(file = %name, error = %err, "skipping file for this poll");
                if !report.skipped.iter().any(|s| s == name) {
                    report.skipped.push(name.to_string());
                }
            }
        }
    }
}
