//! Diagnostic status payload

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RunState;

/// Point-in-time diagnostic view of the machine, richer than the snapshot.
///
/// This is what the front-end's `status` command prints. The observable
/// contract for renderers stays the snapshot channel; the report adds the
/// completion guard, uptime, and last-command bookkeeping for humans
/// poking at a live timer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub remaining_seconds: u64,
    pub run_state: RunState,
    /// Whether completion has already been delivered for the current run.
    pub notified_this_run: bool,
    /// How long the machine has existed, formatted as "1h 2m 3s".
    pub uptime: String,
    pub last_command: Option<String>,
    pub last_command_at: Option<DateTime<Utc>>,
}

/// Format an uptime duration the way the status report shows it.
pub(crate) fn format_uptime(uptime: Duration) -> String {
    let total = uptime.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
