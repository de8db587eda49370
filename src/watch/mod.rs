// src/watch/mod.rs

//! Directory polling and incremental magic-string scanning.
//!
//! This module is responsible for:
//! - Listing the watched directory once per poll (`snapshot`).
//! - Remembering, per file, the highest line already reported (`ledger`).
//! - Scanning one file for the magic string past its watermark (`scanner`).
//! - Diffing each snapshot against the ledger and driving the scanner
//!   (`reconcile`).
//!
//! It does **not** sleep, handle signals or know about process lifetime;
//! see `engine` for the loop around it.

pub mod ledger;
pub mod reconcile;
pub mod scanner;
pub mod snapshot;

pub use ledger::ScanLedger;
pub use reconcile::{MagicMatch, PassReport, Reconciler};
pub use scanner::{scan_file, ScanOutcome};
pub use snapshot::DirectorySnapshot;
