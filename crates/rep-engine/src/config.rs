//! Engine configuration

use serde::{Deserialize, Serialize};

/// Repetition engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum detected landmarks for a frame to be classifiable.
    ///
    /// The shoulder/elbow joints sit at estimator indices 11-14, so a frame
    /// carrying fewer than 15 landmarks cannot cover them. Frames below the
    /// minimum classify as `Neither` and hold the current phase.
    pub min_landmarks: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { min_landmarks: 15 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_covers_elbow_indices() {
        use pose_frame::Joint;
        let config = EngineConfig::default();
        assert!(config.min_landmarks > Joint::RightElbow.index());
    }
}
