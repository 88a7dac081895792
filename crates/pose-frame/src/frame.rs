//! Per-frame joint snapshots

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::joint::Joint;

/// 2-D pixel position. Image coordinates: y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One snapshot of estimated joint positions.
///
/// May be partially populated: the estimator omits landmarks it is not
/// confident about, and whole frames can arrive empty when no body is in
/// view. Frames are ephemeral; nothing downstream retains them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JointFrame {
    /// Detected landmarks and their pixel positions
    #[serde(default)]
    pub joints: HashMap<Joint, Point2>,
    /// Capture timestamp (milliseconds)
    #[serde(default)]
    pub timestamp_ms: u64,
    /// Frame sequence number
    #[serde(default)]
    pub sequence: u32,
}

impl JointFrame {
    /// Create an empty frame with capture metadata
    pub fn new(timestamp_ms: u64, sequence: u32) -> Self {
        Self {
            joints: HashMap::new(),
            timestamp_ms,
            sequence,
        }
    }

    /// Builder-style insertion for constructing frames
    pub fn with(mut self, joint: Joint, x: f32, y: f32) -> Self {
        self.joints.insert(joint, Point2::new(x, y));
        self
    }

    /// Record a detected landmark position
    pub fn insert(&mut self, joint: Joint, position: Point2) {
        self.joints.insert(joint, position);
    }

    /// Position of a landmark, if detected this frame
    pub fn get(&self, joint: Joint) -> Option<Point2> {
        self.joints.get(&joint).copied()
    }

    /// Whether a landmark was detected this frame
    pub fn contains(&self, joint: Joint) -> bool {
        self.joints.contains_key(&joint)
    }

    /// Number of detected landmarks
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    /// True when the estimator detected nothing
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }
}
