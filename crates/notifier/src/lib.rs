//! Notification Dispatch
//!
//! Converts counting events into outbound announcements without ever
//! blocking the frame-processing path. Events carry value snapshots taken at
//! dispatch time; the worker never sees live counter state.

mod dispatch;

pub use dispatch::{NotificationWorker, NotifierHandle};

use serde::{Deserialize, Serialize};

/// A counting event, snapshotted at dispatch time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Notification {
    /// A repetition completed
    RepCompleted { count: u32 },

    /// The submitted target was reached
    TargetReached { count: u32 },
}

impl Notification {
    /// Spoken message for the announcer collaborator.
    ///
    /// Rep completions produce no speech; the count display is the UI
    /// collaborator's concern.
    pub fn spoken_message(&self) -> Option<String> {
        match self {
            Notification::RepCompleted { .. } => None,
            Notification::TargetReached { count } => Some(format!(
                "Congratulations! You have completed your target of {count}."
            )),
        }
    }
}

/// External speech/sound collaborator seam
pub trait Announcer: Send + Sync + 'static {
    /// Deliver one spoken message. May take arbitrarily long; the worker
    /// task absorbs the latency.
    fn announce(&self, message: &str);
}

/// Announcer that logs instead of speaking, for headless runs
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn announce(&self, message: &str) {
        tracing::info!(message, "announcement");
    }
}
