#![allow(dead_code)]

pub use dirwatch_test_utils::builders;
pub use dirwatch_test_utils::fake_fs;
pub use dirwatch_test_utils::{capture_logs, init_tracing, with_timeout};

use std::fs;
use std::io::Write;
use std::path::Path;

/// Append text to a real file, creating it if needed.
pub fn append(path: &Path, text: &str) {
    let mut f = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .unwrap();
    f.write_all(text.as_bytes()).unwrap();
}
