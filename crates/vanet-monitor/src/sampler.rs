//! The periodic sampler.

use vanet_core::SimTime;
use vanet_flow::{FlowSnapshotSource, aggregate};
use vanet_sched::{PeriodicTask, TaskState};

use crate::{CsvSink, MonitorError, MonitorResult};

/// Per-flow console detail is logged only this far into the run — long
/// enough to identify the flows a scenario produced, short enough not to
/// drown the log.
const DETAIL_WINDOW: SimTime = SimTime::from_secs(10);

/// Pulls a flow snapshot each tick, aggregates it, and appends one CSV row.
///
/// Re-arming is delegated to the embedded [`PeriodicTask`]: the scheduled
/// callback calls [`on_tick`][Self::on_tick] and queues a follow-up at the
/// returned instant, if any.  A sink write failure cancels the task and is
/// held for [`take_error`][Self::take_error].
pub struct PeriodicSampler {
    task: PeriodicTask,
    sink: CsvSink,
    rows_written: usize,
    last_error: Option<MonitorError>,
}

impl PeriodicSampler {
    /// A sampler appending to `sink` every `cadence` until `end_time`.
    pub fn new(sink: CsvSink, cadence: SimTime, end_time: SimTime) -> MonitorResult<Self> {
        Ok(Self {
            task: PeriodicTask::new(cadence, end_time)?,
            sink,
            rows_written: 0,
            last_error: None,
        })
    }

    /// Execute one sampling tick at `now`.
    ///
    /// Returns the instant to re-arm at, or `None` once the task has
    /// stopped.  A tick that arrives after cancellation does nothing — the
    /// armed scheduler entry fires once and falls through.
    ///
    /// A missing or empty snapshot is zero included flows, not an error; the
    /// resulting all-zero row is valid output.
    pub fn on_tick<S: FlowSnapshotSource>(&mut self, now: SimTime, source: &S) -> Option<SimTime> {
        if !self.task.is_armed() {
            return None;
        }

        let snapshot = source.snapshot(now);
        if now <= DETAIL_WINDOW {
            log_flow_detail(now, &snapshot, source);
        }

        let sample = aggregate(now, &snapshot);
        log::debug!(
            "{now}: {} valid flows, {:.3} Kbps / {:.6} s / {:.2} %",
            sample.valid_flow_count,
            sample.avg_throughput_kbps,
            sample.avg_delay_secs,
            sample.avg_pdr_percent,
        );

        if let Err(e) = self.sink.append(&sample) {
            log::error!("metrics write failed at {now}: {e}");
            self.task.cancel();
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
            return None;
        }
        self.rows_written += 1;

        self.task.next_fire(now)
    }

    /// Stop sampling without waiting for the end time.  Any already-queued
    /// tick fires once and does nothing.
    pub fn cancel(&mut self) {
        self.task.cancel();
    }

    /// Close the sink.  Call exactly once, after the scheduler has drained.
    pub fn finish(&mut self) -> MonitorResult<()> {
        self.sink.close()
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all appends succeeded.
    pub fn take_error(&mut self) -> Option<MonitorError> {
        self.last_error.take()
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn state(&self) -> TaskState {
        self.task.state()
    }
}

/// Log each visible flow with its endpoints and per-flow metrics.
fn log_flow_detail<S: FlowSnapshotSource>(
    now: SimTime,
    snapshot: &[vanet_flow::FlowRecord],
    source: &S,
) {
    log::info!("========== {now}: {} flows ==========", snapshot.len());
    for record in snapshot {
        let endpoints = source
            .endpoints(record.id)
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unknown".to_owned());
        match record.metrics() {
            Some(m) => log::info!(
                "flow {} ({endpoints}): {:.3} Kbps, {:.6} s delay, {:.2} % PDR",
                record.id,
                m.throughput_kbps,
                m.avg_delay_secs,
                m.pdr_percent,
            ),
            None => log::info!("flow {} ({endpoints}): no delivered traffic yet", record.id),
        }
    }
}
