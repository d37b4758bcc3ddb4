//! Run states of the countdown machine

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which phase the countdown is in; governs which commands are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    /// Fresh or reset: nothing counting, nothing to resume.
    Idle,
    /// A ticker is live and the remaining time decrements once per second.
    Running,
    /// Counting is suspended; the remaining time is preserved.
    Paused,
    /// The countdown reached zero; a new duration must be staged before
    /// it can run again.
    Expired,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Paused => "paused",
            RunState::Expired => "expired",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RunState::Idle).unwrap(), "\"idle\"");
        assert_eq!(
            serde_json::to_string(&RunState::Expired).unwrap(),
            "\"expired\""
        );
    }

    #[test]
    fn display_matches_serde_form() {
        assert_eq!(RunState::Running.to_string(), "running");
        assert_eq!(RunState::Paused.to_string(), "paused");
    }
}
