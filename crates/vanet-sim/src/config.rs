//! Typed scenario configuration.
//!
//! Every knob the scenarios tune is an explicit, typed field validated at
//! construction — there is no string-keyed attribute bag.  Fields the core
//! never consumes (`phy_mode`, `RoutingConfig`) are still typed and
//! validated here, then handed to the external topology setup verbatim.

use std::path::PathBuf;

use vanet_core::SimTime;

use crate::{SimError, SimResult};

// ── Monitor ───────────────────────────────────────────────────────────────────

/// Configuration of the periodic QoS monitor.
#[derive(Clone, Debug)]
pub struct MonitorConfig {
    /// Master switch; disabled runs produce no metrics file at all.
    pub enabled: bool,
    /// Where the CSV lands.
    pub output_path: PathBuf,
    /// Instant of the first sampling tick (1.0 s or 5.0 s in the shipped
    /// scenarios).
    pub first_sample_at: SimTime,
    /// Tick spacing; fixed at 1.0 s across scenarios.
    pub cadence: SimTime,
    /// Last instant at which a tick re-arms (the cutoff tick still samples).
    pub end_time: SimTime,
}

impl MonitorConfig {
    /// The monitor every shipped scenario runs: on, 1 s cadence, 99 s cutoff.
    pub fn to_file(output_path: impl Into<PathBuf>) -> Self {
        Self {
            enabled: true,
            output_path: output_path.into(),
            first_sample_at: SimTime::from_secs(1),
            cadence: SimTime::from_secs(1),
            end_time: SimTime::from_secs(99),
        }
    }
}

// ── Routing (forwarded, not consumed) ─────────────────────────────────────────

/// Proactive-routing timer intervals, forwarded to the external routing
/// stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoutingConfig {
    pub hello_interval: SimTime,
    pub tc_interval: SimTime,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            hello_interval: SimTime::from_secs(2),
            tc_interval: SimTime::from_secs(5),
        }
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

/// Top-level configuration for one scenario run.
#[derive(Clone, Debug)]
pub struct ScenarioConfig {
    /// Master RNG seed; the same seed always reproduces the run.
    pub seed: u64,
    /// Scheduler horizon — no event executes past this instant.
    pub run_until: SimTime,
    /// Instant of the one-shot global mover freeze.
    pub stop_motion_at: SimTime,
    pub monitor: MonitorConfig,
    pub routing: RoutingConfig,
    /// Wifi PHY mode string, forwarded to the external topology setup.
    pub phy_mode: String,
}

impl ScenarioConfig {
    /// The standard run window: 100 s horizon, freeze at 60 s, monitor to
    /// `output_path`.
    pub fn standard(seed: u64, output_path: impl Into<PathBuf>) -> Self {
        Self {
            seed,
            run_until: SimTime::from_secs(100),
            stop_motion_at: SimTime::from_secs(60),
            monitor: MonitorConfig::to_file(output_path),
            routing: RoutingConfig::default(),
            phy_mode: "DsssRate1Mbps".to_owned(),
        }
    }

    /// Reject configurations that cannot produce a well-formed run.
    pub fn validate(&self) -> SimResult<()> {
        let m = &self.monitor;
        if m.cadence == SimTime::ZERO {
            return Err(SimError::Config("monitor cadence must be positive".into()));
        }
        if m.first_sample_at > m.end_time {
            return Err(SimError::Config(format!(
                "first sample at {} is after the monitor end time {}",
                m.first_sample_at, m.end_time
            )));
        }
        if m.end_time > self.run_until {
            return Err(SimError::Config(format!(
                "monitor end time {} is past the {} horizon",
                m.end_time, self.run_until
            )));
        }
        if self.stop_motion_at > self.run_until {
            return Err(SimError::Config(format!(
                "stop-motion at {} is past the {} horizon",
                self.stop_motion_at, self.run_until
            )));
        }
        if self.routing.hello_interval == SimTime::ZERO
            || self.routing.tc_interval == SimTime::ZERO
        {
            return Err(SimError::Config(
                "routing timer intervals must be positive".into(),
            ));
        }
        Ok(())
    }
}
