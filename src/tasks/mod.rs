//! Background tasks module
//!
//! This module contains the background task that drives a running countdown.

pub(crate) mod ticker;

// Re-export main functions
pub(crate) use ticker::spawn_ticker;
