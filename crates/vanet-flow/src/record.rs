//! Read-only per-flow accounting records.

use std::net::Ipv4Addr;

use vanet_core::{FlowId, SimTime};

/// Source/destination address pair of a flow, resolved by the snapshot
/// source's classifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowEndpoints {
    pub source: Ipv4Addr,
    pub destination: Ipv4Addr,
}

impl std::fmt::Display for FlowEndpoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// Cumulative counters for one directed flow, as reported by the external
/// flow-accounting collaborator at a snapshot instant.
///
/// The core only ever reads these — the collaborator owns and mutates them.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowRecord {
    pub id: FlowId,

    /// Packets handed to the sender's socket so far.
    pub tx_packets: u64,
    /// Packets delivered to the receiver so far.
    pub rx_packets: u64,

    pub tx_bytes: u64,
    pub rx_bytes: u64,

    /// Sum of per-packet one-way delays across all received packets, seconds.
    pub delay_sum_secs: f64,

    /// Instant the first packet was transmitted.
    pub time_first_tx: SimTime,
    /// Instant the last packet was received.
    pub time_last_rx: SimTime,
}

impl FlowRecord {
    /// Active span of the flow: `time_last_rx - time_first_tx`, in seconds.
    ///
    /// Negative only for malformed records (last rx before first tx); the
    /// saturating subtraction clamps those to zero, which the inclusion
    /// predicate then rejects.
    #[inline]
    pub fn duration_secs(&self) -> f64 {
        self.time_last_rx.since(self.time_first_tx).as_secs_f64()
    }
}
