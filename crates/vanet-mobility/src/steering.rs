//! Velocity steering policies.
//!
//! Both shipped policies return a velocity of magnitude `policy.speed`; only
//! the direction differs:
//!
//! - **Fixed heading** — a random angle drawn once per mover.
//! - **Anchor seeking** — head for a chosen anchor, unless already within
//!   `near_anchor_radius` of it, in which case scatter on a random heading
//!   so movers don't oscillate or pile up on the anchor.
//!
//! The near-anchor branch also covers a mover standing exactly on its anchor
//! (`length == 0`), so no normalization ever divides by zero.

use vanet_core::{StreamId, StreamRng, Vec2};

use crate::{Anchor, nearest_anchor};

// ── Policy parameters ─────────────────────────────────────────────────────────

/// Tunable steering parameters, shared by every mover in a scenario.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SteeringPolicy {
    /// Velocity magnitude, m/s.
    pub speed: f64,
    /// Distance under which a mover counts as having reached its anchor.
    pub near_anchor_radius: f64,
    /// Probability of picking the nearest anchor over a uniformly random one.
    pub nearest_anchor_prob: f64,
}

impl Default for SteeringPolicy {
    /// The values observed across all shipped scenarios.
    fn default() -> Self {
        Self {
            speed: 5.0,
            near_anchor_radius: 50.0,
            nearest_anchor_prob: 0.7,
        }
    }
}

/// Which steering policy a scenario runs.
pub enum SteeringMode {
    /// Static per-mover heading at a random angle.
    FixedHeading,
    /// Steer toward the given anchor set.
    AnchorSeeking { anchors: Vec<Anchor> },
}

// ── Random streams ────────────────────────────────────────────────────────────

/// The named random streams steering draws from.
///
/// One stream per independent decision: sharing a stream between unrelated
/// decisions would let one scenario knob perturb another's draws and break
/// reproducibility.  Tests construct the streams directly with a known seed.
pub struct SteeringStreams {
    /// Fixed-heading mode: the per-mover travel angle.
    pub heading: StreamRng,
    /// Anchor-seeking: the nearest-vs-random coin and the random pick.
    pub choice: StreamRng,
    /// Near-anchor exception: the scatter angle.
    pub scatter: StreamRng,
}

impl SteeringStreams {
    /// Derive all three streams from the run's global seed.
    pub fn from_seed(global_seed: u64) -> Self {
        Self {
            heading: StreamRng::new(global_seed, StreamId::Heading),
            choice: StreamRng::new(global_seed, StreamId::AnchorChoice),
            scatter: StreamRng::new(global_seed, StreamId::Scatter),
        }
    }
}

// ── Steering ──────────────────────────────────────────────────────────────────

/// A velocity at a uniformly random angle in `[0, 2π)`, magnitude `speed`.
#[inline]
pub fn random_heading(speed: f64, stream: &mut StreamRng) -> Vec2 {
    Vec2::from_polar(stream.gen_angle(), speed)
}

/// Anchor-seeking velocity for a mover at `position`.
///
/// Picks the squared-distance-nearest anchor with probability
/// `policy.nearest_anchor_prob`, otherwise a uniformly random one; then heads
/// straight for it at `policy.speed`.  Within `policy.near_anchor_radius` of
/// the chosen anchor — including standing exactly on it — the mover scatters
/// on a random heading instead.  An empty anchor set also scatters.
pub fn seek_anchor(
    position: Vec2,
    anchors: &[Anchor],
    policy: &SteeringPolicy,
    choice: &mut StreamRng,
    scatter: &mut StreamRng,
) -> Vec2 {
    let target = if choice.gen_bool(policy.nearest_anchor_prob) {
        nearest_anchor(anchors, position)
    } else {
        choice.choose(anchors)
    };
    let Some(target) = target else {
        return random_heading(policy.speed, scatter);
    };

    let direction = target.position - position;
    if direction.length() < policy.near_anchor_radius {
        return random_heading(policy.speed, scatter);
    }
    direction.scaled_to(policy.speed)
}

/// Compute one mover's setup velocity under `mode`.
pub fn steer(
    position: Vec2,
    mode: &SteeringMode,
    policy: &SteeringPolicy,
    streams: &mut SteeringStreams,
) -> Vec2 {
    match mode {
        SteeringMode::FixedHeading => random_heading(policy.speed, &mut streams.heading),
        SteeringMode::AnchorSeeking { anchors } => seek_anchor(
            position,
            anchors,
            policy,
            &mut streams.choice,
            &mut streams.scatter,
        ),
    }
}
