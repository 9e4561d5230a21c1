//! Fixed anchor points (roadside units).

use vanet_core::{AnchorId, Vec2};

/// A fixed reference point mobile entities steer toward.
///
/// Immutable for the simulation lifetime.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Anchor {
    pub id: AnchorId,
    pub position: Vec2,
}

impl Anchor {
    pub fn new(id: AnchorId, position: Vec2) -> Self {
        Self { id, position }
    }
}

/// The anchor minimizing squared Euclidean distance to `from`, or `None` for
/// an empty set.  Ties keep the earliest anchor.
pub fn nearest_anchor(anchors: &[Anchor], from: Vec2) -> Option<&Anchor> {
    let mut best: Option<(&Anchor, f64)> = None;
    for anchor in anchors {
        let dist = from.distance_squared(anchor.position);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((anchor, dist)),
        }
    }
    best.map(|(a, _)| a)
}
