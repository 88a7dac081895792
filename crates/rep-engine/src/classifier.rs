//! Posture classification from joint geometry

use pose_frame::{Joint, JointFrame};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;

/// Per-frame posture reading, derived and stateless
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostureSignal {
    /// Both shoulders at or below their elbows (lowered posture)
    Down,
    /// Both shoulders at or above their elbows (raised posture)
    Up,
    /// Ambiguous geometry or insufficient landmarks
    Neither,
}

/// Whether the frame carries every landmark the classifier reads
pub fn has_required_joints(frame: &JointFrame) -> bool {
    frame.contains(Joint::LeftShoulder)
        && frame.contains(Joint::LeftElbow)
        && frame.contains(Joint::RightShoulder)
        && frame.contains(Joint::RightElbow)
}

/// Classify one frame's posture.
///
/// Missing landmarks yield `Neither` silently; transient detection loss must
/// hold the phase, not corrupt it. The down check runs first and wins when
/// shoulders and elbows are exactly level.
pub fn classify(frame: &JointFrame, config: &EngineConfig) -> PostureSignal {
    if frame.len() < config.min_landmarks {
        return PostureSignal::Neither;
    }

    let (Some(left_shoulder), Some(left_elbow), Some(right_shoulder), Some(right_elbow)) = (
        frame.get(Joint::LeftShoulder),
        frame.get(Joint::LeftElbow),
        frame.get(Joint::RightShoulder),
        frame.get(Joint::RightElbow),
    ) else {
        return PostureSignal::Neither;
    };

    // Image coordinates grow downward: y(shoulder) >= y(elbow) means the
    // shoulder is at or below the elbow.
    if left_shoulder.y >= left_elbow.y && right_shoulder.y >= right_elbow.y {
        PostureSignal::Down
    } else if left_shoulder.y <= left_elbow.y && right_shoulder.y <= right_elbow.y {
        PostureSignal::Up
    } else {
        PostureSignal::Neither
    }
}
