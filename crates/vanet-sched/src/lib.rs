//! `vanet-sched` — discrete-event scheduling for the rust_vanet scenarios.
//!
//! # Execution model
//!
//! ```text
//! while queue has an instant t within the horizon:
//!   ① now ← t
//!   ② drain every event queued for t (FIFO within the instant)
//!   ③ run each to completion; events may schedule further events
//! ```
//!
//! Single-threaded and cooperative: one callback at a time, strictly
//! nondecreasing simulated time, no preemption.  Nothing here relates
//! simulated time to wall-clock time.
//!
//! [`PeriodicTask`] models a recurring callback's lifecycle (`Armed` →
//! `Stopped`) explicitly, so a stopping condition is a first-class,
//! testable transition rather than a tail of ad hoc re-registrations.

pub mod error;
pub mod event;
pub mod periodic;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use error::{SchedError, SchedResult};
pub use event::Event;
pub use periodic::{PeriodicTask, TaskState};
pub use scheduler::Scheduler;
