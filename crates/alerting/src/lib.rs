//! Target Alerting
//!
//! Tracks an optional repetition target and decides, on every count update,
//! whether the target-reached notification should fire. Firing is one-shot
//! per submitted target.

mod monitor;

pub use monitor::{TargetError, TargetMonitor, TargetStatus};
