// src/engine/banner.rs

use std::time::Duration;

use jiff::{SignedDuration, Zoned};

const RULE: &str = "----------------------------------------------------";

pub fn startup_banner(program: &str, started: &Zoned) -> String {
    format!(
        "\n{RULE}\n\tRunning {program}\n\tStarted on {}\n{RULE}",
        started.strftime("%Y-%m-%d %H:%M:%S%.3f %Z")
    )
}

pub fn shutdown_banner(program: &str, uptime: Duration) -> String {
    format!(
        "\n{RULE}\n\tStopped {program}\n\tUptime was: {}\n{RULE}",
        format_uptime(uptime)
    )
}

/// Friendly uptime like `1h 2m 3s 450ms`, truncated to milliseconds.
pub fn format_uptime(uptime: Duration) -> String {
    let millis = u64::try_from(uptime.as_millis()).unwrap_or(u64::MAX);
    let truncated = Duration::from_millis(millis);
    match SignedDuration::try_from(truncated) {
        Ok(d) => format!("{d:#}"),
        Err(_) => format!("{truncated:?}"),
    }
}
