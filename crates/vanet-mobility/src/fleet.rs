//! The `MoverFleet` — dense per-mover movement state.

use vanet_core::{MoverId, SimTime, Vec2};

/// Position and velocity of one mobile entity.
///
/// The position is advanced by the external constant-velocity mobility model
/// ([`MoverFleet::advance`] in the shipped scenarios); the velocity is
/// written only at setup steering and by the global freeze.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MoverState {
    pub id: MoverId,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl MoverState {
    /// A mover at rest at `position`.
    #[inline]
    pub fn at(id: MoverId, position: Vec2) -> Self {
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
        }
    }
}

/// All tracked movers, indexed by `MoverId`.
///
/// The fleet is the single mutation point for velocities — there is no other
/// handle to a mover's motion, which is what makes the stop transition's
/// invariant checkable.
pub struct MoverFleet {
    /// Per-mover state, indexed by `MoverId`.
    pub states: Vec<MoverState>,
}

impl MoverFleet {
    /// A fleet of `count` movers at the origin, at rest.
    pub fn new(count: usize) -> Self {
        Self {
            states: (0..count)
                .map(|i| MoverState::at(MoverId(i as u32), Vec2::ZERO))
                .collect(),
        }
    }

    /// A fleet with the given initial positions, at rest.
    pub fn from_positions(positions: Vec<Vec2>) -> Self {
        Self {
            states: positions
                .into_iter()
                .enumerate()
                .map(|(i, p)| MoverState::at(MoverId(i as u32), p))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[inline]
    pub fn position(&self, mover: MoverId) -> Vec2 {
        self.states[mover.index()].position
    }

    #[inline]
    pub fn velocity(&self, mover: MoverId) -> Vec2 {
        self.states[mover.index()].velocity
    }

    #[inline]
    pub fn set_velocity(&mut self, mover: MoverId, velocity: Vec2) {
        self.states[mover.index()].velocity = velocity;
    }

    /// Set every tracked mover's velocity to the zero vector.
    ///
    /// This is the stop-motion transition: terminal for the scenario designs
    /// (nothing re-assigns velocities afterward) and idempotent — freezing a
    /// frozen fleet is a no-op.
    pub fn freeze_all(&mut self) {
        for state in &mut self.states {
            state.velocity = Vec2::ZERO;
        }
        log::info!("froze {} movers", self.states.len());
    }

    /// `true` once every mover's velocity is the zero vector.
    pub fn is_frozen(&self) -> bool {
        self.states.iter().all(|s| s.velocity.is_zero())
    }

    /// Advance every position by `velocity * dt` — the constant-velocity
    /// mobility model the scenarios run under.
    pub fn advance(&mut self, dt: SimTime) {
        let secs = dt.as_secs_f64();
        for state in &mut self.states {
            state.position = state.position + state.velocity * secs;
        }
    }
}
