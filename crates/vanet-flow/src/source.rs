//! The `FlowSnapshotSource` trait — the seam to the external flow collector.

use vanet_core::{FlowId, SimTime};

use crate::{FlowEndpoints, FlowRecord};

/// Read access to the external flow-accounting collaborator.
///
/// Implementations expose the set of flow records visible at a simulated
/// instant plus a classifier that resolves a flow id to its endpoints.
/// The sampler treats a missing or empty snapshot as "zero included flows",
/// never as an error, so `snapshot` is infallible by design.
pub trait FlowSnapshotSource {
    /// The flow records visible at `at`.
    ///
    /// Counters are cumulative since each flow began; successive snapshots
    /// of the same flow are monotone in every counter.
    fn snapshot(&self, at: SimTime) -> Vec<FlowRecord>;

    /// Resolve a flow id to its source/destination pair, if known.
    fn endpoints(&self, flow: FlowId) -> Option<FlowEndpoints>;
}
