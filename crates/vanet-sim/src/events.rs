//! The two scheduled event types a scenario registers.

use vanet_flow::FlowSnapshotSource;
use vanet_sched::{Event, Scheduler};

use crate::ScenarioContext;

/// One sampling tick.  Fires the sampler and re-arms itself at whatever
/// instant the sampler's periodic task dictates — once the task stops (end
/// time reached, or cancelled) no further tick is queued.
pub struct SampleTick;

impl<S: FlowSnapshotSource> Event<ScenarioContext<S>> for SampleTick {
    fn fire(
        self: Box<Self>,
        ctx: &mut ScenarioContext<S>,
        sched: &mut Scheduler<ScenarioContext<S>>,
    ) {
        // Split borrow: the sampler mutates while the flow source is read.
        let ScenarioContext { flows, sampler, .. } = ctx;
        let Some(sampler) = sampler.as_mut() else {
            return;
        };
        if let Some(next) = sampler.on_tick(sched.now(), flows) {
            sched.schedule_at(next, SampleTick);
        }
    }
}

/// The one-shot global freeze: every tracked mover's velocity becomes the
/// zero vector.  Terminal — nothing re-activates motion afterward.
pub struct StopMotionEvent;

impl<S: FlowSnapshotSource> Event<ScenarioContext<S>> for StopMotionEvent {
    fn fire(
        self: Box<Self>,
        ctx: &mut ScenarioContext<S>,
        sched: &mut Scheduler<ScenarioContext<S>>,
    ) {
        log::info!("stop-motion event at {}", sched.now());
        ctx.fleet.freeze_all();
    }
}
