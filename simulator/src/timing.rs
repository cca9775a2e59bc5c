//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

/// Event loop period. The loop sleeps if a pass completes early.
pub const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Length of one long vibration pulse.
pub const VIBRATION_DURATION: Duration = Duration::from_millis(500);
