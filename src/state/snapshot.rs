//! Observer-facing view of the countdown

use serde::{Deserialize, Serialize};

use super::RunState;

/// What observers see: the remaining whole seconds and the run state.
///
/// Published on the machine's watch channel after every tick and every
/// accepted command. Cheap to copy and carries no handles, so front-ends
/// can hold snapshots across renders without touching the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub remaining_seconds: u64,
    pub run_state: RunState,
}

impl TimerSnapshot {
    /// The state a fresh machine starts in.
    pub fn idle() -> Self {
        Self {
            remaining_seconds: 0,
            run_state: RunState::Idle,
        }
    }
}

impl Default for TimerSnapshot {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_snapshot_is_idle_at_zero() {
        let snapshot = TimerSnapshot::default();
        assert_eq!(snapshot.remaining_seconds, 0);
        assert_eq!(snapshot.run_state, RunState::Idle);
    }
}
