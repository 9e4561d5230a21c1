//! Simulated time model.
//!
//! # Design
//!
//! Simulated time is a monotonically increasing millisecond counter wrapped
//! in `SimTime`.  The scenarios talk in fractional seconds (1.0 s sampling
//! cadence, 0.1 s application start offsets), but storing time as an integer
//! keeps arithmetic exact and gives the scheduler a totally ordered map key
//! — `f64` instants would have neither.
//!
//! `SimTime` is used both as an instant on the single global time axis and
//! as a duration; the arithmetic operators below cover both readings.
//! There is deliberately no mapping to wall-clock time: nothing in the core
//! may assume one (the event engine runs as fast as it can).

use std::fmt;

/// An instant (or span) of simulated time, stored as whole milliseconds.
///
/// `u64` milliseconds last ~584 million years — far past any horizon.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    #[inline]
    pub const fn from_millis(ms: u64) -> Self {
        SimTime(ms)
    }

    #[inline]
    pub const fn from_secs(secs: u64) -> Self {
        SimTime(secs * 1_000)
    }

    /// Convert from fractional seconds, rounding to the nearest millisecond.
    ///
    /// # Panics
    /// Panics if `secs` is negative or not finite — there is no valid
    /// simulated instant for either.
    pub fn from_secs_f64(secs: f64) -> Self {
        assert!(
            secs.is_finite() && secs >= 0.0,
            "invalid simulated time: {secs}"
        );
        SimTime((secs * 1_000.0).round() as u64)
    }

    #[inline]
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1_000.0
    }

    /// Span elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: SimTime) -> SimTime {
        SimTime(self.0.saturating_sub(earlier.0))
    }
}

impl std::ops::Add for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: SimTime) -> SimTime {
        SimTime(self.0 + rhs.0)
    }
}

impl std::ops::Sub for SimTime {
    type Output = SimTime;
    #[inline]
    fn sub(self, rhs: SimTime) -> SimTime {
        SimTime(self.0 - rhs.0)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.as_secs_f64())
    }
}
