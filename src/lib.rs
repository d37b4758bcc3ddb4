//! Countdown - a state-machine timer with a one-time completion alert
//!
//! This library provides a countdown driven by four commands (set a duration,
//! start, pause, reset) and a once-per-second tick, plus the terminal
//! front-end around it. Observers watch snapshots; completion is delivered
//! exactly once per run through a pluggable notifier.

pub mod config;
pub mod display;
pub mod notify;
pub mod state;
pub(crate) mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use notify::{AlertNotifier, CompletionNotifier};
pub use state::{CountdownTimer, RunState, StatusReport, TimerSnapshot};
pub use utils::signals::shutdown_signal;
