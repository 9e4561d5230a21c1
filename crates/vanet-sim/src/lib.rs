//! `vanet-sim` — scenario orchestration.
//!
//! # Run shape
//!
//! ```text
//! ScenarioRunner::new(config, flows, fleet, mode, policy)
//!   ① validate the typed config
//!   ② open the metrics sink (fatal on failure) and build the sampler
//!   ③ assign each mover one setup velocity via the steering policy
//!   ④ register exactly one initial sampler tick + one stop-motion event
//! runner.run()
//!   ⑤ drain the scheduler to the horizon
//!   ⑥ close the sink once and surface any deferred write error
//! ```
//!
//! All run state lives in a [`ScenarioContext`] threaded through the
//! scheduler — nothing is process-wide, so two scenarios can run side by
//! side in one process (or one test binary).

pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod runner;

#[cfg(test)]
mod tests;

pub use config::{MonitorConfig, RoutingConfig, ScenarioConfig};
pub use context::ScenarioContext;
pub use error::{SimError, SimResult};
pub use events::{SampleTick, StopMotionEvent};
pub use runner::{RunReport, ScenarioRunner};
