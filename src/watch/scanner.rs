// src/watch/scanner.rs

use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, trace};

use crate::errors::{DirwatchError, Result};
use crate::fs::FileSystem;

/// Result of scanning one file against its previous watermark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Highest matching line seen so far; equal to the input watermark when
    /// nothing new matched.
    pub watermark: usize,
    /// 1-based line numbers reported by this scan, ascending.
    pub new_matches: Vec<usize>,
}

/// Scan `dir/name` from its first line for `magic_lower`.
///
/// Lines at or below `watermark` are skipped; every later line whose
/// lowercased content contains `magic_lower` is reported once, no matter how
/// often the string occurs within it. Match records are logged only after
/// the whole file was read, so a failed read never half-reports a file.
///
/// The file is re-read from the start on every call; existing lines are
/// assumed immutable and deduplication relies on the watermark alone.
pub fn scan_file(
    fs: &dyn FileSystem,
    dir: &Path,
    name: &str,
    magic_lower: &str,
    watermark: usize,
) -> Result<ScanOutcome> {
    let path = dir.join(name);
    let unreadable = |source: anyhow::Error| DirwatchError::FileUnreadable {
        path: path.clone(),
        source,
    };

    let reader = fs.open_read(&path).map_err(unreadable)?;
    let mut reader = BufReader::new(reader);

    let mut outcome = ScanOutcome {
        watermark,
        new_matches: Vec::new(),
    };
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| unreadable(e.into()))?;
        if n == 0 {
            break;
        }
        line_no += 1;
        if line_no <= watermark {
            continue;
        }
        let line = String::from_utf8_lossy(&buf).to_lowercase();
        if line.contains(magic_lower) {
            outcome.new_matches.push(line_no);
            outcome.watermark = line_no;
        }
    }

    trace!(file = %name, lines = line_no, "scanned file");

    for line in &outcome.new_matches {
        info!(file = %name, line, "magic word found in {name} on line {line}");
    }

    Ok(outcome)
}
