//! `vanet-flow` — per-flow counters and QoS aggregation.
//!
//! The external flow-accounting collaborator owns the counters; this crate
//! defines the read-only view the instrumentation core consumes
//! ([`FlowRecord`], [`FlowSnapshotSource`]) and the pure reduction from a
//! snapshot to one network-wide [`AggregateSample`] ([`aggregate`]).
//!
//! [`FlowTable`] is the in-memory `FlowSnapshotSource` used by tests and the
//! demo scenarios; a real run would back the trait with the simulator's flow
//! monitor instead.

pub mod metrics;
pub mod record;
pub mod source;
pub mod table;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use metrics::{AggregateSample, FlowMetrics, aggregate};
pub use record::{FlowEndpoints, FlowRecord};
pub use source::FlowSnapshotSource;
pub use table::FlowTable;
