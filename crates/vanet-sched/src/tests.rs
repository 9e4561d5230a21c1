//! Unit tests for the scheduler and periodic task.

#[cfg(test)]
mod scheduler {
    use vanet_core::SimTime;

    use crate::{Event, Scheduler};

    type Log = Vec<(SimTime, &'static str)>;

    fn mark(label: &'static str) -> impl FnOnce(&mut Log, &mut Scheduler<Log>) {
        move |log: &mut Log, sched: &mut Scheduler<Log>| log.push((sched.now(), label))
    }

    #[test]
    fn fires_in_time_order() {
        let mut sched: Scheduler<Log> = Scheduler::new(SimTime::from_secs(100));
        sched.schedule_at(SimTime::from_secs(30), mark("c"));
        sched.schedule_at(SimTime::from_secs(10), mark("a"));
        sched.schedule_at(SimTime::from_secs(20), mark("b"));

        let mut log = Log::new();
        sched.run(&mut log);
        let labels: Vec<_> = log.iter().map(|(_, l)| *l).collect();
        assert_eq!(labels, ["a", "b", "c"]);
        assert_eq!(log[2].0, SimTime::from_secs(30));
    }

    #[test]
    fn same_instant_is_fifo() {
        let mut sched: Scheduler<Log> = Scheduler::new(SimTime::from_secs(10));
        let t = SimTime::from_secs(5);
        sched.schedule_at(t, mark("first"));
        sched.schedule_at(t, mark("second"));

        let mut log = Log::new();
        sched.run(&mut log);
        let labels: Vec<_> = log.iter().map(|(_, l)| *l).collect();
        assert_eq!(labels, ["first", "second"]);
    }

    #[test]
    fn horizon_boundary_is_inclusive() {
        let mut sched: Scheduler<Log> = Scheduler::new(SimTime::from_secs(100));
        sched.schedule_at(SimTime::from_secs(100), mark("at-horizon"));
        let mut log = Log::new();
        sched.run(&mut log);
        assert_eq!(log.len(), 1);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    #[should_panic(expected = "past the")]
    fn scheduling_past_horizon_asserts() {
        let mut sched: Scheduler<Log> = Scheduler::new(SimTime::from_secs(100));
        sched.schedule_at(SimTime::from_millis(100_001), mark("too-late"));
    }

    #[test]
    fn zero_delay_runs_within_same_drain() {
        let mut sched: Scheduler<Log> = Scheduler::new(SimTime::from_secs(10));
        sched.schedule_at(
            SimTime::from_secs(3),
            |log: &mut Log, sched: &mut Scheduler<Log>| {
                log.push((sched.now(), "outer"));
                sched.schedule_in(SimTime::ZERO, mark("inner"));
            },
        );

        let mut log = Log::new();
        sched.run(&mut log);
        let labels: Vec<_> = log.iter().map(|(_, l)| *l).collect();
        assert_eq!(labels, ["outer", "inner"]);
        assert_eq!(log[1].0, SimTime::from_secs(3));
    }

    #[test]
    fn recurring_chain_stops_at_bound() {
        struct Chain {
            every: SimTime,
            until: SimTime,
        }
        impl Event<Log> for Chain {
            fn fire(self: Box<Self>, log: &mut Log, sched: &mut Scheduler<Log>) {
                log.push((sched.now(), "tick"));
                if sched.now() < self.until {
                    let every = self.every;
                    sched.schedule_in(every, *self);
                }
            }
        }

        let mut sched: Scheduler<Log> = Scheduler::new(SimTime::from_secs(10));
        sched.schedule_at(
            SimTime::from_secs(1),
            Chain {
                every: SimTime::from_secs(1),
                until: SimTime::from_secs(5),
            },
        );

        let mut log = Log::new();
        sched.run(&mut log);
        assert_eq!(log.len(), 5); // ticks at 1, 2, 3, 4, 5
        assert_eq!(log.last().unwrap().0, SimTime::from_secs(5));
    }

    #[test]
    #[should_panic(expected = "scheduled")]
    fn scheduling_into_the_past_asserts() {
        let mut sched: Scheduler<Log> = Scheduler::new(SimTime::from_secs(10));
        sched.schedule_at(
            SimTime::from_secs(5),
            |_log: &mut Log, sched: &mut Scheduler<Log>| {
                sched.schedule_at(SimTime::from_secs(1), mark("late"));
            },
        );
        sched.run(&mut Log::new());
    }

    #[test]
    fn pending_counts_queued_events() {
        let mut sched: Scheduler<Log> = Scheduler::new(SimTime::from_secs(10));
        assert_eq!(sched.pending(), 0);
        sched.schedule_at(SimTime::from_secs(1), mark("a"));
        sched.schedule_at(SimTime::from_secs(1), mark("b"));
        sched.schedule_at(SimTime::from_secs(2), mark("c"));
        assert_eq!(sched.pending(), 3);
        sched.run(&mut Log::new());
        assert_eq!(sched.pending(), 0);
    }
}

#[cfg(test)]
mod periodic {
    use vanet_core::SimTime;

    use crate::{PeriodicTask, SchedError, TaskState};

    #[test]
    fn rearms_until_end_time() {
        let mut task =
            PeriodicTask::new(SimTime::from_secs(1), SimTime::from_secs(99)).unwrap();

        let mut now = SimTime::from_secs(1);
        let mut fires = vec![now];
        while let Some(next) = task.next_fire(now) {
            now = next;
            fires.push(now);
        }

        // First fire at 1 s, cadence 1 s, end 99 s: fires at 1..=99.
        assert_eq!(fires.len(), 99);
        assert_eq!(*fires.last().unwrap(), SimTime::from_secs(99));
        assert_eq!(task.state(), TaskState::Stopped);
    }

    #[test]
    fn stopped_at_end_time_exactly() {
        let mut task =
            PeriodicTask::new(SimTime::from_secs(1), SimTime::from_secs(5)).unwrap();
        assert_eq!(
            task.next_fire(SimTime::from_secs(4)),
            Some(SimTime::from_secs(5))
        );
        assert_eq!(task.next_fire(SimTime::from_secs(5)), None);
        assert!(!task.is_armed());
    }

    #[test]
    fn cancel_is_terminal() {
        let mut task =
            PeriodicTask::new(SimTime::from_secs(1), SimTime::from_secs(99)).unwrap();
        task.cancel();
        assert_eq!(task.state(), TaskState::Stopped);
        assert_eq!(task.next_fire(SimTime::from_secs(1)), None);
        // A second cancel is a no-op, not an error.
        task.cancel();
        assert_eq!(task.next_fire(SimTime::from_secs(2)), None);
    }

    #[test]
    fn zero_cadence_rejected() {
        let err = PeriodicTask::new(SimTime::ZERO, SimTime::from_secs(10)).unwrap_err();
        assert!(matches!(err, SchedError::ZeroCadence));
    }
}
