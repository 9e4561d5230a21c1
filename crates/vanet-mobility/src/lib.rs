//! `vanet-mobility` — mover state and velocity steering.
//!
//! A scenario owns one [`MoverFleet`] (dense per-mover position/velocity
//! storage) and assigns each mover a velocity exactly once at setup via
//! [`steer`].  Two policies exist: a fixed random heading, and anchor-seeking
//! toward roadside units with a near-anchor scatter exception.  The scheduled
//! global stop later calls [`MoverFleet::freeze_all`].
//!
//! All randomness flows through [`SteeringStreams`] — named, independently
//! seeded streams — so steering is reproducible and mockable.

pub mod anchor;
pub mod fleet;
pub mod steering;


pub use anchor::{Anchor, nearest_anchor};
pub use fleet::{MoverFleet, MoverState};
pub use steering::{SteeringMode, SteeringPolicy, SteeringStreams, random_heading, seek_anchor, steer};
