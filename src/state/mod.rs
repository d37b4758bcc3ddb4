//! State management module
//!
//! This module contains the countdown state machine and the types it
//! exposes to observers.

pub mod machine;
pub mod report;
pub mod run_state;
pub mod snapshot;

// Re-export main types
pub use machine::CountdownTimer;
pub use report::StatusReport;
pub use run_state::RunState;
pub use snapshot::TimerSnapshot;
