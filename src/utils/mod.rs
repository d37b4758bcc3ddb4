//! Utility functions module
//!
//! Small helpers that do not belong to the state machine itself.

pub mod signals;

// Re-export main functions
pub use signals::shutdown_signal;
