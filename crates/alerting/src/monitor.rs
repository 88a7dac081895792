//! Target Monitor Implementation

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Target submission errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("target must be a whole number, got {0:?}")]
    NotANumber(String),

    #[error("target must be greater than zero")]
    NotPositive,
}

/// Target state as shown to the display layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "target")]
pub enum TargetStatus {
    NotSet,
    Set(u32),
    Achieved,
}

/// Tracks the caller's rep target and fires once when it is reached.
///
/// A count reset elsewhere in the pipeline does not clear a submitted
/// target; the target keeps counting against post-reset reps.
#[derive(Debug, Default)]
pub struct TargetMonitor {
    /// Pending target, cleared when reached
    target: Option<u32>,
    /// Whether the last submitted target was reached
    achieved: bool,
}

impl TargetMonitor {
    /// Create a monitor with no target set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and store a target from caller text.
    ///
    /// Rejects non-numeric and non-positive input without touching a
    /// previously submitted target.
    pub fn submit(&mut self, text: &str) -> Result<u32, TargetError> {
        let trimmed = text.trim();
        let value: u32 = trimmed
            .parse()
            .map_err(|_| TargetError::NotANumber(trimmed.to_string()))?;
        if value == 0 {
            return Err(TargetError::NotPositive);
        }

        info!(target = value, "rep target set");
        self.target = Some(value);
        self.achieved = false;
        Ok(value)
    }

    /// Check a count update against the target.
    ///
    /// Returns the final count the first time the target is met, then clears
    /// the target so the same submission cannot refire. No-op when no target
    /// is set.
    pub fn on_count(&mut self, count: u32) -> Option<u32> {
        let target = self.target?;
        if count < target {
            debug!(count, target, "target not yet reached");
            return None;
        }

        info!(count, target, "rep target reached");
        self.target = None;
        self.achieved = true;
        Some(count)
    }

    /// Pending target, if any
    pub fn target(&self) -> Option<u32> {
        self.target
    }

    /// Display state for the UI layer
    pub fn status(&self) -> TargetStatus {
        match self.target {
            Some(n) => TargetStatus::Set(n),
            None if self.achieved => TargetStatus::Achieved,
            None => TargetStatus::NotSet,
        }
    }
}
