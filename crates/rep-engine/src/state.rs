//! Repetition state machine

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::PostureSignal;

/// Current posture phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Unknown,
    Down,
    Up,
}

/// Counter state, tracked for the life of a session.
///
/// Mutated only by [`CounterState::apply`]; the count never decreases except
/// through an explicit [`CounterState::reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    /// Last committed posture phase
    pub phase: Phase,
    /// Completed repetitions this session
    pub count: u32,
}

impl CounterState {
    /// Fold one posture signal into the machine.
    ///
    /// A repetition is strictly a Down-to-Up edge. The down write is
    /// level-triggered: consecutive down frames restate `Down` with no side
    /// effect, so a later single up reading still counts exactly once. An up
    /// reading without a prior down phase means nothing, and `Neither` holds
    /// the phase so single-frame detection gaps cannot lose progress.
    ///
    /// Returns the new count when this signal completed a repetition.
    pub fn apply(&mut self, signal: PostureSignal) -> Option<u32> {
        match signal {
            PostureSignal::Down => {
                self.phase = Phase::Down;
                None
            }
            PostureSignal::Up if self.phase == Phase::Down => {
                self.phase = Phase::Up;
                self.count += 1;
                debug!(count = self.count, "repetition completed");
                Some(self.count)
            }
            PostureSignal::Up => None,
            PostureSignal::Neither => None,
        }
    }

    /// Clear the count and return the phase to `Unknown`
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
