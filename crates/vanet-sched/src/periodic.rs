//! `PeriodicTask` — explicit lifecycle for a recurring callback.

use vanet_core::SimTime;

use crate::{SchedError, SchedResult};

/// Lifecycle state of a periodic task.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TaskState {
    /// The task expects to fire again.
    Armed,
    /// The task has passed its end time or been cancelled; it never re-arms.
    Stopped,
}

/// The re-arming policy of a recurring callback, separated from the work the
/// callback does.
///
/// After each firing, the owner asks [`next_fire`][Self::next_fire] whether
/// and when to re-arm.  Once `Stopped` — by reaching `end_time` or by an
/// explicit [`cancel`][Self::cancel] — the task stays stopped; there is no
/// re-activation transition.
#[derive(Debug)]
pub struct PeriodicTask {
    cadence: SimTime,
    end_time: SimTime,
    state: TaskState,
}

impl PeriodicTask {
    /// A task firing every `cadence` until `end_time`.
    pub fn new(cadence: SimTime, end_time: SimTime) -> SchedResult<Self> {
        if cadence == SimTime::ZERO {
            return Err(SchedError::ZeroCadence);
        }
        Ok(Self {
            cadence,
            end_time,
            state: TaskState::Armed,
        })
    }

    #[inline]
    pub fn cadence(&self) -> SimTime {
        self.cadence
    }

    #[inline]
    pub fn end_time(&self) -> SimTime {
        self.end_time
    }

    #[inline]
    pub fn state(&self) -> TaskState {
        self.state
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.state == TaskState::Armed
    }

    /// Decide the next fire instant after a tick at `now`.
    ///
    /// Returns `Some(now + cadence)` while `now < end_time`; at or past the
    /// end time the task transitions to `Stopped` and returns `None`.  A
    /// cancelled task always returns `None`.
    pub fn next_fire(&mut self, now: SimTime) -> Option<SimTime> {
        match self.state {
            TaskState::Stopped => None,
            TaskState::Armed => {
                if now < self.end_time {
                    Some(now + self.cadence)
                } else {
                    self.state = TaskState::Stopped;
                    None
                }
            }
        }
    }

    /// Stop the task immediately.  An already-queued firing will still run,
    /// but a cancelled task tells it not to re-arm (and its owner not to do
    /// the periodic work).
    pub fn cancel(&mut self) {
        self.state = TaskState::Stopped;
    }
}
