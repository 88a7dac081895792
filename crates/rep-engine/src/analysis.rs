//! Per-frame analysis results

use serde::{Deserialize, Serialize};

use crate::classifier::PostureSignal;
use crate::state::Phase;

/// Complete result of folding one frame into the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameAnalysis {
    /// Whether the shoulder/elbow landmarks were all present
    pub joints_detected: bool,

    /// Raw posture reading for this frame
    pub signal: PostureSignal,

    /// Phase after the transition
    pub phase: Phase,

    /// Cumulative count after the transition
    pub count: u32,

    /// New count, set when this frame completed a repetition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rep_completed: Option<u32>,
}

impl FrameAnalysis {
    /// Whether this frame completed a repetition
    pub fn completed_rep(&self) -> bool {
        self.rep_completed.is_some()
    }
}
