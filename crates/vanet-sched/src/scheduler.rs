//! The event queue and its drain loop.
//!
//! # Why a `BTreeMap`
//!
//! Most instants have no events; a sparse map keyed by `SimTime` costs
//! O(log W) per insert where W = number of distinct pending instants.  For
//! these scenarios W stays tiny (a sampler chain plus a couple of one-shots),
//! so the constant is negligible and the ordered keys give the nondecreasing
//! execution order for free.

use std::collections::BTreeMap;

use vanet_core::SimTime;

use crate::Event;

/// A single-threaded discrete-event scheduler over context type `C`.
///
/// The context is owned by the caller and threaded mutably through every
/// callback — no process-wide state anywhere.
pub struct Scheduler<C> {
    now: SimTime,
    horizon: SimTime,
    queue: BTreeMap<SimTime, Vec<Box<dyn Event<C>>>>,
    /// Cached total event count for O(1) `pending()`.
    pending: usize,
}

impl<C> Scheduler<C> {
    /// Create a scheduler that will not execute events past `horizon`.
    pub fn new(horizon: SimTime) -> Self {
        Self {
            now: SimTime::ZERO,
            horizon,
            queue: BTreeMap::new(),
            pending: 0,
        }
    }

    /// The current simulated instant.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    #[inline]
    pub fn horizon(&self) -> SimTime {
        self.horizon
    }

    /// Number of events still queued.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Queue `event` to fire at the absolute instant `at`.
    ///
    /// Events queued for the same instant fire in insertion order.
    ///
    /// # Panics
    /// Scheduling into the past or beyond the horizon is a programming
    /// error, not a runtime condition, and is surfaced as an assertion.
    pub fn schedule_at(&mut self, at: SimTime, event: impl Event<C> + 'static) {
        assert!(at >= self.now, "scheduled {at} but now is {}", self.now);
        debug_assert!(
            at <= self.horizon,
            "scheduled {at} past the {} horizon",
            self.horizon
        );
        self.queue.entry(at).or_default().push(Box::new(event));
        self.pending += 1;
    }

    /// Queue `event` to fire `delay` after the current instant.
    pub fn schedule_in(&mut self, delay: SimTime, event: impl Event<C> + 'static) {
        self.schedule_at(self.now + delay, event);
    }

    /// Drain the queue, running every event up to and including the horizon.
    ///
    /// Each batch for an instant is removed before firing, so events are free
    /// to schedule new work — including work at the instant being drained,
    /// which runs before time advances further.  Events queued beyond the
    /// horizon are left unexecuted.
    pub fn run(&mut self, ctx: &mut C) {
        while let Some(at) = self.queue.keys().next().copied() {
            if at > self.horizon {
                break;
            }
            self.now = at;
            let batch = self.queue.remove(&at).unwrap_or_default();
            self.pending -= batch.len();
            for event in batch {
                event.fire(ctx, self);
            }
        }
    }
}
