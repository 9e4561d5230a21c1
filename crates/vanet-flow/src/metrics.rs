//! Snapshot → aggregate reduction.
//!
//! Pure computation: no I/O, no state.  A flow contributes to the aggregate
//! only if it passes the inclusion predicate — it has transmitted *and*
//! received at least one packet over a positive span.  Excluded flows are
//! dropped entirely, not averaged in as zeros.

use vanet_core::SimTime;

use crate::FlowRecord;

// ── Per-flow metrics ──────────────────────────────────────────────────────────

/// QoS metrics for a single included flow.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlowMetrics {
    pub throughput_kbps: f64,
    pub avg_delay_secs: f64,
    pub pdr_percent: f64,
}

impl FlowRecord {
    /// Compute this flow's metrics, or `None` if it fails the inclusion
    /// predicate (`tx_packets > 0 && rx_packets > 0 && duration > 0`).
    pub fn metrics(&self) -> Option<FlowMetrics> {
        if self.tx_packets == 0 || self.rx_packets == 0 {
            return None;
        }
        let duration = self.duration_secs();
        if duration <= 0.0 {
            return None;
        }
        Some(FlowMetrics {
            throughput_kbps: self.rx_bytes as f64 * 8.0 / duration / 1024.0,
            avg_delay_secs: self.delay_sum_secs / self.rx_packets as f64,
            pdr_percent: self.rx_packets as f64 * 100.0 / self.tx_packets as f64,
        })
    }
}

// ── Aggregate sample ──────────────────────────────────────────────────────────

/// One network-wide sample: the unweighted mean of each metric across all
/// included flows at a sampling instant.
///
/// Immutable after construction; the sampler appends it to the sink and
/// drops it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateSample {
    pub time: SimTime,
    pub avg_throughput_kbps: f64,
    pub avg_delay_secs: f64,
    pub avg_pdr_percent: f64,
    pub valid_flow_count: usize,
}

impl AggregateSample {
    /// The all-zero sample for an instant with no included flows.
    pub fn empty(time: SimTime) -> Self {
        Self {
            time,
            avg_throughput_kbps: 0.0,
            avg_delay_secs: 0.0,
            avg_pdr_percent: 0.0,
            valid_flow_count: 0,
        }
    }
}

/// Reduce a snapshot to one [`AggregateSample`] stamped `at`.
///
/// Zero included flows yields the all-zero sample — a deliberate policy
/// (an idle network is valid output), not an error, and the guard against
/// dividing by `valid_flow_count = 0`.
pub fn aggregate(at: SimTime, snapshot: &[FlowRecord]) -> AggregateSample {
    let mut total_throughput = 0.0;
    let mut total_delay = 0.0;
    let mut total_pdr = 0.0;
    let mut valid_flow_count = 0usize;

    for record in snapshot {
        if let Some(m) = record.metrics() {
            total_throughput += m.throughput_kbps;
            total_delay += m.avg_delay_secs;
            total_pdr += m.pdr_percent;
            valid_flow_count += 1;
        }
    }

    if valid_flow_count == 0 {
        return AggregateSample::empty(at);
    }

    let n = valid_flow_count as f64;
    AggregateSample {
        time: at,
        avg_throughput_kbps: total_throughput / n,
        avg_delay_secs: total_delay / n,
        avg_pdr_percent: total_pdr / n,
        valid_flow_count,
    }
}
