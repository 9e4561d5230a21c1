//! The scenario runner — setup, drain, teardown.

use vanet_core::{MoverId, SimTime};
use vanet_flow::FlowSnapshotSource;
use vanet_mobility::{MoverFleet, SteeringMode, SteeringPolicy, SteeringStreams, steer};
use vanet_monitor::{CsvSink, PeriodicSampler};
use vanet_sched::Scheduler;

use crate::{SampleTick, ScenarioConfig, ScenarioContext, SimResult, StopMotionEvent};

/// What a completed run reports back to its harness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// CSV rows appended (0 when the monitor is disabled).
    pub samples_written: usize,
    /// The last instant the scheduler executed.
    pub final_time: SimTime,
    /// Whether every mover ended the run at zero velocity.
    pub frozen: bool,
}

/// Owns a scenario's context and scheduler from setup through teardown.
///
/// Construction performs all setup-time work: config validation, sink
/// opening (fatal on failure — a run without metrics capture has no
/// purpose), one steering assignment per mover, and the registration of
/// exactly one initial sampler tick plus one stop-motion event.
pub struct ScenarioRunner<S: FlowSnapshotSource> {
    ctx: ScenarioContext<S>,
    sched: Scheduler<ScenarioContext<S>>,
}

impl<S: FlowSnapshotSource + 'static> ScenarioRunner<S> {
    pub fn new(
        config: &ScenarioConfig,
        flows: S,
        fleet: MoverFleet,
        mode: &SteeringMode,
        policy: &SteeringPolicy,
    ) -> SimResult<Self> {
        config.validate()?;

        // The core only carries these to the boundary.
        log::info!(
            "topology setup: phy mode {}, hello interval {}, tc interval {}",
            config.phy_mode,
            config.routing.hello_interval,
            config.routing.tc_interval,
        );

        let sampler = if config.monitor.enabled {
            let sink = CsvSink::open(&config.monitor.output_path)?;
            Some(PeriodicSampler::new(
                sink,
                config.monitor.cadence,
                config.monitor.end_time,
            )?)
        } else {
            None
        };

        let mut ctx = ScenarioContext {
            flows,
            fleet,
            sampler,
        };

        // Setup steering: one velocity assignment per mover, in id order so
        // the stream draws are reproducible.
        let mut streams = SteeringStreams::from_seed(config.seed);
        for i in 0..ctx.fleet.len() {
            let mover = MoverId(i as u32);
            let velocity = steer(ctx.fleet.position(mover), mode, policy, &mut streams);
            ctx.fleet.set_velocity(mover, velocity);
        }
        log::info!("steered {} movers", ctx.fleet.len());

        let mut sched = Scheduler::new(config.run_until);
        if ctx.sampler.is_some() {
            sched.schedule_at(config.monitor.first_sample_at, SampleTick);
        }
        sched.schedule_at(config.stop_motion_at, StopMotionEvent);

        Ok(Self { ctx, sched })
    }

    /// Drain the scheduler to the horizon, close the sink, and report.
    ///
    /// A sink write error stored during the run surfaces here as `Err` —
    /// the run's output is incomplete and the harness should treat it as
    /// failed.
    pub fn run(&mut self) -> SimResult<RunReport> {
        self.sched.run(&mut self.ctx);

        let mut samples_written = 0;
        if let Some(sampler) = self.ctx.sampler.as_mut() {
            sampler.finish()?;
            if let Some(e) = sampler.take_error() {
                return Err(e.into());
            }
            samples_written = sampler.rows_written();
        }

        Ok(RunReport {
            samples_written,
            final_time: self.sched.now(),
            frozen: self.ctx.fleet.is_frozen(),
        })
    }

    /// Register an additional event before the run.
    ///
    /// This is the hook external collaborators attach through — e.g. the
    /// mobility model's position-integration step.  The core itself only
    /// ever registers the initial sampler tick and the stop-motion event.
    pub fn schedule_at(
        &mut self,
        at: SimTime,
        event: impl vanet_sched::Event<ScenarioContext<S>> + 'static,
    ) {
        self.sched.schedule_at(at, event);
    }

    /// Read access to the run state (final positions, flow source, …).
    pub fn context(&self) -> &ScenarioContext<S> {
        &self.ctx
    }

    /// Mutable access for scenario-specific setup between construction and
    /// [`run`][Self::run] — e.g. pinning one designated mover in place.
    pub fn context_mut(&mut self) -> &mut ScenarioContext<S> {
        &mut self.ctx
    }
}
