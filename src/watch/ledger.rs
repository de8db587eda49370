// src/watch/ledger.rs

use std::collections::BTreeMap;

/// Per-file watermark table: file name -> highest 1-based line number
/// already reported as a magic match.
///
/// A value of `0` means "tracked, nothing reported yet", which is distinct
/// from an absent entry ("never seen"). Entries are created when a file is
/// first observed and dropped when it disappears from the directory.
///
/// Single-owner state: the reconciler is the only reader and writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanLedger {
    watermarks: BTreeMap<String, usize>,
}

impl ScanLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.watermarks.get(name).copied()
    }

    /// Record the watermark for `name`.
    ///
    /// An existing watermark never moves backwards; a lower `line` is
    /// ignored. To start a file over, [`ScanLedger::remove`] it first.
    pub fn set(&mut self, name: &str, line: usize) {
        let entry = self.watermarks.entry(name.to_string()).or_insert(line);
        if line > *entry {
            *entry = line;
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<usize> {
        self.watermarks.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.watermarks.contains_key(name)
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.watermarks.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.watermarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watermarks.is_empty()
    }
}
