//! The per-run scenario context.

use vanet_flow::FlowSnapshotSource;
use vanet_mobility::MoverFleet;
use vanet_monitor::PeriodicSampler;

/// Everything a scheduled callback may touch, owned in one place and passed
/// by reference through the scheduler.
///
/// This replaces the process-wide mover list / file handle / monitor handle
/// triple of the original scenarios: ownership is explicit, and a test can
/// build as many contexts as it likes.
pub struct ScenarioContext<S: FlowSnapshotSource> {
    /// The external flow-accounting collaborator (or a scripted stand-in).
    pub flows: S,
    /// All tracked movers.
    pub fleet: MoverFleet,
    /// The metrics sampler; `None` when the monitor is disabled.
    pub sampler: Option<PeriodicSampler>,
}
