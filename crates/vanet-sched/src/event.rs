//! The `Event` trait — one scheduled callback.

use crate::Scheduler;

/// A one-shot scheduled callback over a scenario context `C`.
///
/// Events are boxed and consumed on firing; a recurring behavior re-arms by
/// scheduling a fresh event through the `sched` handle it receives.  The
/// current instant is available as `sched.now()`.
///
/// Closures get a blanket impl, so ad hoc callbacks need no struct:
///
/// ```rust,ignore
/// sched.schedule_in(SimTime::from_secs(60), |ctx: &mut Ctx, _sched: &mut Scheduler<Ctx>| {
///     ctx.fleet.freeze_all();
/// });
/// ```
pub trait Event<C> {
    fn fire(self: Box<Self>, ctx: &mut C, sched: &mut Scheduler<C>);
}

impl<C, F> Event<C> for F
where
    F: FnOnce(&mut C, &mut Scheduler<C>),
{
    fn fire(self: Box<Self>, ctx: &mut C, sched: &mut Scheduler<C>) {
        (*self)(ctx, sched)
    }
}
