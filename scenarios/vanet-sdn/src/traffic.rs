//! Synthetic traffic model standing in for the external flow collector.
//!
//! Each flow is a constant-rate sender with a fixed delivery ratio and mean
//! per-packet delay; counters at any instant are derived analytically from
//! the elapsed active span.  Snapshots are therefore monotone, exactly as
//! the real collector's cumulative counters would be.

use std::net::Ipv4Addr;

use vanet_core::{FlowId, SimTime};
use vanet_flow::{FlowEndpoints, FlowRecord, FlowSnapshotSource};

/// One scripted constant-rate flow.
pub struct SyntheticFlow {
    pub endpoints: FlowEndpoints,
    pub start: SimTime,
    pub stop: SimTime,
    pub packet_size: u64,
    pub rate_bps: f64,
    /// Fraction of transmitted packets that arrive.
    pub delivery_ratio: f64,
    pub mean_delay_secs: f64,
}

impl SyntheticFlow {
    fn record_at(&self, id: FlowId, at: SimTime) -> FlowRecord {
        let start = self.start.as_secs_f64();
        let active_end = at.as_secs_f64().min(self.stop.as_secs_f64());
        let span = (active_end - start).max(0.0);

        let packets_per_sec = self.rate_bps / 8.0 / self.packet_size as f64;
        let tx_packets = (packets_per_sec * span).floor() as u64;
        let rx_packets = (tx_packets as f64 * self.delivery_ratio).floor() as u64;

        FlowRecord {
            id,
            tx_packets,
            rx_packets,
            tx_bytes: tx_packets * self.packet_size,
            rx_bytes: rx_packets * self.packet_size,
            delay_sum_secs: rx_packets as f64 * self.mean_delay_secs,
            time_first_tx: self.start,
            time_last_rx: if rx_packets > 0 {
                SimTime::from_secs_f64(active_end)
            } else {
                self.start
            },
        }
    }
}

/// The scripted flow set for one run.
pub struct SyntheticTraffic {
    flows: Vec<(FlowId, SyntheticFlow)>,
}

impl SyntheticTraffic {
    pub fn new(flows: Vec<SyntheticFlow>) -> Self {
        Self {
            flows: flows
                .into_iter()
                .enumerate()
                .map(|(i, f)| (FlowId(i as u32 + 1), f))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }
}

impl FlowSnapshotSource for SyntheticTraffic {
    fn snapshot(&self, at: SimTime) -> Vec<FlowRecord> {
        self.flows.iter().map(|(id, f)| f.record_at(*id, at)).collect()
    }

    fn endpoints(&self, flow: FlowId) -> Option<FlowEndpoints> {
        self.flows
            .iter()
            .find(|(id, _)| *id == flow)
            .map(|(_, f)| f.endpoints)
    }
}

fn addr(last_octet: u8) -> Ipv4Addr {
    Ipv4Addr::new(10, 1, 1, last_octet)
}

fn between(src: u8, dst: u8) -> FlowEndpoints {
    FlowEndpoints {
        source: addr(src),
        destination: addr(dst),
    }
}

/// The anchor scenario's flows: the designated mover-0 → mover-9 stream plus
/// ten uplinks from movers to the central server.
pub fn anchor_scenario_flows() -> SyntheticTraffic {
    let mut flows = vec![SyntheticFlow {
        endpoints: between(1, 10),
        start: SimTime::from_secs(2),
        stop: SimTime::from_secs(95),
        packet_size: 1024,
        rate_bps: 250_000.0,
        delivery_ratio: 0.92,
        mean_delay_secs: 0.015,
    }];
    for i in 0..10u8 {
        flows.push(SyntheticFlow {
            endpoints: FlowEndpoints {
                source: addr(i + 1),
                destination: addr(200), // the server behind the switch
            },
            start: SimTime::from_millis(2_000 + 100 * i as u64),
            stop: SimTime::from_secs(95),
            packet_size: 1024,
            rate_bps: 250_000.0,
            delivery_ratio: 0.70 + 0.02 * i as f64,
            mean_delay_secs: 0.010 + 0.004 * (i % 4) as f64,
        });
    }
    SyntheticTraffic::new(flows)
}

/// The ad-hoc scenario's flows: mover 0 → mover 9 plus nine shorter
/// peer-to-peer streams.
pub fn adhoc_scenario_flows() -> SyntheticTraffic {
    let mut flows = vec![SyntheticFlow {
        endpoints: between(1, 10),
        start: SimTime::from_secs(1),
        stop: SimTime::from_secs(60),
        packet_size: 1024,
        rate_bps: 150_000.0,
        delivery_ratio: 0.88,
        mean_delay_secs: 0.025,
    }];
    for i in 1..10u8 {
        flows.push(SyntheticFlow {
            endpoints: between(i + 1, 30 + i),
            start: SimTime::from_secs(10 + i as u64),
            stop: SimTime::from_secs(60),
            packet_size: 512,
            rate_bps: 250_000.0,
            delivery_ratio: 0.60 + 0.03 * i as f64,
            mean_delay_secs: 0.030 + 0.005 * (i % 3) as f64,
        });
    }
    SyntheticTraffic::new(flows)
}
