//! `FlowTable` — an in-memory `FlowSnapshotSource`.
//!
//! Test harnesses and the demo scenarios script this table directly instead
//! of standing up a real flow monitor.  Flow ids are assigned sequentially
//! from 1, matching the numbering convention of the external collector.

use vanet_core::{FlowId, SimTime, VanetError, VanetResult};

use crate::{FlowEndpoints, FlowRecord, FlowSnapshotSource};

/// A mutable flow registry whose snapshots are simply its current contents.
#[derive(Default)]
pub struct FlowTable {
    flows: Vec<(FlowRecord, FlowEndpoints)>,
}

impl FlowTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new flow between `endpoints` with zeroed counters.
    ///
    /// Returns the assigned id (sequential from 1).
    pub fn register(&mut self, endpoints: FlowEndpoints) -> FlowId {
        let id = FlowId(self.flows.len() as u32 + 1);
        let record = FlowRecord {
            id,
            tx_packets: 0,
            rx_packets: 0,
            tx_bytes: 0,
            rx_bytes: 0,
            delay_sum_secs: 0.0,
            time_first_tx: SimTime::ZERO,
            time_last_rx: SimTime::ZERO,
        };
        self.flows.push((record, endpoints));
        id
    }

    /// Mutable access to a flow's counters (the "collaborator" side).
    pub fn record_mut(&mut self, flow: FlowId) -> VanetResult<&mut FlowRecord> {
        self.flows
            .iter_mut()
            .map(|(r, _)| r)
            .find(|r| r.id == flow)
            .ok_or(VanetError::FlowNotFound(flow))
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}

impl FlowSnapshotSource for FlowTable {
    fn snapshot(&self, _at: SimTime) -> Vec<FlowRecord> {
        self.flows.iter().map(|(r, _)| *r).collect()
    }

    fn endpoints(&self, flow: FlowId) -> Option<FlowEndpoints> {
        self.flows
            .iter()
            .find(|(r, _)| r.id == flow)
            .map(|(_, e)| *e)
    }
}
