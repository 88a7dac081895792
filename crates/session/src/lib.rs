//! Session Orchestration
//!
//! Owns the single-threaded frame path: each incoming joint frame is
//! classified, folded through the repetition state machine, and checked
//! against the target before the next frame is accepted. The only
//! concurrency is outbound: completed-rep and target-reached events are
//! handed to the notification worker and never awaited here.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use alerting::{TargetError, TargetMonitor, TargetStatus};
use notifier::{Notification, NotifierHandle};
use pose_frame::JointFrame;
use rep_engine::{EngineConfig, FrameAnalysis, Phase, RepEngine};

/// Recent events kept for the status surface
const EVENT_HISTORY: usize = 32;

/// Timestamped event record exposed to the API layer
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub event: Notification,
}

/// One capture session's counting pipeline
pub struct SessionTracker {
    id: Uuid,
    running: bool,
    engine: RepEngine,
    targets: TargetMonitor,
    notifier: NotifierHandle,
    recent_events: VecDeque<EventRecord>,
}

impl SessionTracker {
    /// Create a tracker wired to a notification handle
    pub fn new(config: EngineConfig, notifier: NotifierHandle) -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, "session tracker created");
        Self {
            id,
            running: false,
            engine: RepEngine::new(config),
            targets: TargetMonitor::new(),
            notifier,
            recent_events: VecDeque::with_capacity(EVENT_HISTORY),
        }
    }

    /// Begin accepting frames. Stored counts are untouched.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            info!(session = %self.id, "session started");
        }
    }

    /// Stop accepting frames. Counts and any pending target survive.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            info!(session = %self.id, count = self.engine.count(), "session stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Fold one frame into the pipeline.
    ///
    /// Returns `None` when the session is stopped; the frame is discarded
    /// without touching any state. Frames are processed strictly one at a
    /// time, in arrival order.
    pub fn process_frame(&mut self, frame: &JointFrame) -> Option<FrameAnalysis> {
        if !self.running {
            debug!(sequence = frame.sequence, "frame ignored, session stopped");
            return None;
        }

        let analysis = self.engine.analyze(frame);
        if let Some(count) = analysis.rep_completed {
            self.emit(Notification::RepCompleted { count });
            if let Some(final_count) = self.targets.on_count(count) {
                self.emit(Notification::TargetReached { count: final_count });
            }
        }
        Some(analysis)
    }

    /// Validate and store a rep target from caller text
    pub fn submit_target(&mut self, text: &str) -> Result<u32, TargetError> {
        self.targets.submit(text)
    }

    /// Clear the count and phase. A submitted target is left in place and
    /// keeps counting against post-reset reps.
    pub fn reset_count(&mut self) {
        self.engine.reset();
        info!(session = %self.id, "count reset");
    }

    pub fn count(&self) -> u32 {
        self.engine.count()
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn target_status(&self) -> TargetStatus {
        self.targets.status()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Most recent events, oldest first
    pub fn recent_events(&self) -> &VecDeque<EventRecord> {
        &self.recent_events
    }

    fn emit(&mut self, event: Notification) {
        self.notifier.dispatch(event);
        if self.recent_events.len() >= EVENT_HISTORY {
            self.recent_events.pop_front();
        }
        self.recent_events.push_back(EventRecord {
            timestamp: Utc::now(),
            event,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notifier::NotificationWorker;
    use pose_frame::{Joint, Point2};
    use std::sync::Arc;

    struct SilentAnnouncer;

    impl notifier::Announcer for SilentAnnouncer {
        fn announce(&self, _message: &str) {}
    }

    fn tracker() -> SessionTracker {
        // The worker half is dropped; dispatch degrades to a logged no-op,
        // which is exactly the fire-and-forget contract.
        let (handle, _worker) = NotificationWorker::channel(Arc::new(SilentAnnouncer), 64);
        let mut tracker = SessionTracker::new(EngineConfig::default(), handle);
        tracker.start();
        tracker
    }

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

    fn down_frame(sequence: u32) -> JointFrame {
        full_frame(320.0, 280.0, sequence)
    }

    fn up_frame(sequence: u32) -> JointFrame {
        full_frame(200.0, 280.0, sequence)
    }

    #[test]
    fn test_counts_follow_frame_geometry() {
        let mut tracker = tracker();

        tracker.process_frame(&down_frame(1));
        assert_eq!(tracker.count(), 0);

        tracker.process_frame(&up_frame(2));
        assert_eq!(tracker.count(), 1);

        tracker.process_frame(&down_frame(3));
        tracker.process_frame(&up_frame(4));
        assert_eq!(tracker.count(), 2);
        assert_eq!(tracker.recent_events().len(), 2);
    }

    #[test]
    fn test_target_fires_on_exact_rep() {
        let mut tracker = tracker();
        tracker.submit_target("3").unwrap();

        for seq in 0..3u32 {
            tracker.process_frame(&down_frame(seq * 2));
            tracker.process_frame(&up_frame(seq * 2 + 1));
            if seq < 2 {
                assert_eq!(tracker.target_status(), TargetStatus::Set(3));
            }
        }

        assert_eq!(tracker.count(), 3);
        assert_eq!(tracker.target_status(), TargetStatus::Achieved);

        let events: Vec<_> = tracker.recent_events().iter().map(|r| r.event).collect();
        assert!(events.contains(&Notification::TargetReached { count: 3 }));
        // Exactly one target event.
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, Notification::TargetReached { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn test_invalid_target_keeps_existing() {
        let mut tracker = tracker();
        tracker.submit_target("5").unwrap();

        assert!(tracker.submit_target("abc").is_err());
        assert_eq!(tracker.target_status(), TargetStatus::Set(5));
    }

    #[test]
    fn test_reset_keeps_target() {
        // Resetting the count deliberately leaves a submitted target armed;
        // it keeps counting against post-reset reps.
        let mut tracker = tracker();
        tracker.submit_target("2").unwrap();

        tracker.process_frame(&down_frame(1));
        tracker.process_frame(&up_frame(2));
        tracker.reset_count();

        assert_eq!(tracker.count(), 0);
        assert_eq!(tracker.phase(), Phase::Unknown);
        assert_eq!(tracker.target_status(), TargetStatus::Set(2));

        // The surviving target fires against post-reset counts.
        tracker.process_frame(&down_frame(3));
        tracker.process_frame(&up_frame(4));
        tracker.process_frame(&down_frame(5));
        tracker.process_frame(&up_frame(6));
        assert_eq!(tracker.target_status(), TargetStatus::Achieved);
    }

    #[test]
    fn test_stopped_session_ignores_frames() {
        let mut tracker = tracker();
        tracker.process_frame(&down_frame(1));
        tracker.stop();

        assert!(tracker.process_frame(&up_frame(2)).is_none());
        assert_eq!(tracker.count(), 0);

        // Counts resume from held state after restart.
        tracker.start();
        tracker.process_frame(&up_frame(3));
        assert_eq!(tracker.count(), 1);
    }

    #[test]
    fn test_count_survives_stop_start() {
        let mut tracker = tracker();
        tracker.process_frame(&down_frame(1));
        tracker.process_frame(&up_frame(2));
        tracker.stop();
        tracker.start();
        assert_eq!(tracker.count(), 1);
    }
}
