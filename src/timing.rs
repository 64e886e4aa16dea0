//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

/// How often the main loop samples the clock and handles window events.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Length of one minute on the demo clock.
pub const DEMO_MINUTE: Duration = Duration::from_secs(1);
