//! Repetition counting engine
//!
//! Real-time exercise repetition tracking from pose landmarks:
//! - Posture classification from shoulder/elbow geometry
//! - Debounced repetition state machine (Unknown/Down/Up)
//! - Per-frame analysis results for the session and display layers

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod state;

pub use analysis::FrameAnalysis;
pub use classifier::{classify, has_required_joints, PostureSignal};
pub use config::EngineConfig;
pub use state::{CounterState, Phase};

use pose_frame::JointFrame;

/// Repetition counting module
pub struct RepEngine {
    config: EngineConfig,
    state: CounterState,
}

impl RepEngine {
    /// Create a new engine with configuration
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: CounterState::default(),
        }
    }

    /// Fold a single frame into the state machine.
    ///
    /// One frame is classified and committed fully before the next; callers
    /// must not interleave frames.
    pub fn analyze(&mut self, frame: &JointFrame) -> FrameAnalysis {
        let signal = classifier::classify(frame, &self.config);
        let rep_completed = self.state.apply(signal);

        FrameAnalysis {
            joints_detected: classifier::has_required_joints(frame),
            signal,
            phase: self.state.phase,
            count: self.state.count,
            rep_completed,
        }
    }

    /// Completed repetitions this session
    pub fn count(&self) -> u32 {
        self.state.count
    }

    /// Current posture phase
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Clear the count and phase
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pose_frame::{Joint, Point2};

    fn full_frame(shoulder_y: f32, elbow_y: f32, sequence: u32) -> JointFrame {
        let mut frame = JointFrame::new(sequence as u64 * 33, sequence);
        for i in 0..Joint::COUNT {
            if let Some(joint) = Joint::from_index(i) {
                frame.insert(joint, Point2::new(i as f32, 100.0));
            }
        }
        frame.insert(Joint::LeftShoulder, Point2::new(100.0, shoulder_y));
        frame.insert(Joint::RightShoulder, Point2::new(200.0, shoulder_y));
        frame.insert(Joint::LeftElbow, Point2::new(110.0, elbow_y));
        frame.insert(Joint::RightElbow, Point2::new(210.0, elbow_y));
        frame
    }

    #[test]
    fn test_full_pushup_cycle() {
        let mut engine = RepEngine::new(EngineConfig::default());

        let down = engine.analyze(&full_frame(320.0, 280.0, 1));
        assert_eq!(down.signal, PostureSignal::Down);
        assert_eq!(down.count, 0);
        assert!(!down.completed_rep());

        let up = engine.analyze(&full_frame(200.0, 280.0, 2));
        assert_eq!(up.signal, PostureSignal::Up);
        assert_eq!(up.count, 1);
        assert_eq!(up.rep_completed, Some(1));
    }

    #[test]
    fn test_detection_gap_does_not_lose_progress() {
        let mut engine = RepEngine::new(EngineConfig::default());

        engine.analyze(&full_frame(320.0, 280.0, 1));

        // Estimator loses the body for a frame.
        let gap = engine.analyze(&JointFrame::new(66, 2));
        assert!(!gap.joints_detected);
        assert_eq!(gap.signal, PostureSignal::Neither);
        assert_eq!(gap.phase, Phase::Down);

        let up = engine.analyze(&full_frame(200.0, 280.0, 3));
        assert_eq!(up.rep_completed, Some(1));
    }

    #[test]
    fn test_reset_clears_count_and_phase() {
        let mut engine = RepEngine::new(EngineConfig::default());
        engine.analyze(&full_frame(320.0, 280.0, 1));
        engine.analyze(&full_frame(200.0, 280.0, 2));
        assert_eq!(engine.count(), 1);

        engine.reset();
        assert_eq!(engine.count(), 0);
        assert_eq!(engine.phase(), Phase::Unknown);
    }
}
